//! Hash families for MinHash signatures.
//!
//! A family is a numbered set of hash functions over shingles. The signature
//! builder only needs "the value of function `i` for this shingle, reduced
//! into `[0, range)`", so any family can be swapped in without touching the
//! min-tracking loop.
//!
//! Each family splits hashing into a per-shingle base hash and a cheap
//! per-index derivation, which lets the builder hash every shingle once.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// A numbered family of hash functions over shingles.
pub trait HashFamily {
    /// Hash shared by every function of the family for `shingle`.
    fn base_hash(&self, shingle: &str) -> u64;

    /// Value of function `index` for a shingle with base hash `base`.
    ///
    /// Must be strictly less than `range`; `range` is never zero.
    fn slot_hash(&self, base: u64, index: usize, range: u32) -> u32;

    /// Value of function `index` for `shingle`, in `[0, range)`.
    fn hash(&self, shingle: &str, index: usize, range: u32) -> u32 {
        self.slot_hash(self.base_hash(shingle), index, range)
    }
}

/// Offset family: `|(polyhash(shingle) + index * 31) mod range|`.
///
/// `polyhash` is the 31-multiplier polynomial over UTF-16 code units in
/// wrapping 32-bit arithmetic, and the remainder keeps the dividend's sign
/// before the magnitude is taken. These are the semantics existing reference
/// scores were computed with.
///
/// All functions are shifts of one base value, so they are far from
/// independent; prefer [`SeededHashFamily`] when compatibility does not
/// matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolynomialHashFamily;

/// Per-index offset multiplier of [`PolynomialHashFamily`].
pub const POLYNOMIAL_INDEX_STEP: i32 = 31;

impl PolynomialHashFamily {
    /// The 32-bit polynomial string hash, `s[0]*31^(n-1) + ... + s[n-1]`.
    pub fn polyhash(shingle: &str) -> i32 {
        shingle
            .encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl HashFamily for PolynomialHashFamily {
    fn base_hash(&self, shingle: &str) -> u64 {
        u64::from(Self::polyhash(shingle) as u32)
    }

    fn slot_hash(&self, base: u64, index: usize, range: u32) -> u32 {
        let base = base as u32 as i32;
        let offset = (index as u32 as i32).wrapping_mul(POLYNOMIAL_INDEX_STEP);
        let value = base.wrapping_add(offset);
        // Remainder first, magnitude second: |rem| < range always fits, even
        // for i32::MIN where a plain abs() would overflow.
        let rem = i64::from(value) % i64::from(range);
        rem.unsigned_abs() as u32
    }
}

/// Seeded family: xxh3 base hash, per-index key from splitmix64.
///
/// Functions are close to independent, so slot agreement tracks Jaccard
/// similarity without the bias of the offset family. Use a `hash_range`
/// well above the shingle count to keep minima from colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededHashFamily {
    seed: u64,
}

impl SeededHashFamily {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Key selecting function `index` of the family.
    #[inline]
    fn key(&self, index: usize) -> u64 {
        let step = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        splitmix64(self.seed.wrapping_add(step))
    }
}

impl HashFamily for SeededHashFamily {
    fn base_hash(&self, shingle: &str) -> u64 {
        xxh3_64_with_seed(shingle.as_bytes(), self.seed)
    }

    fn slot_hash(&self, base: u64, index: usize, range: u32) -> u32 {
        (mix_u64(base, self.key(index)) % u64::from(range)) as u32
    }
}

/// A mixing function to create a new hash from an existing one.
#[inline]
pub(crate) fn mix_u64(x: u64, key: u64) -> u64 {
    let mut h = xxh3_64_with_seed(&x.to_le_bytes(), key);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ceb9fe1a85ec53);
    h ^ (h >> 33)
}

/// A 64-bit hash function that is fast and has good distribution.
#[inline]
pub(crate) fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Polynomial family ====================

    #[test]
    fn polyhash_known_values() {
        assert_eq!(PolynomialHashFamily::polyhash(""), 0);
        assert_eq!(PolynomialHashFamily::polyhash("a"), 97);
        assert_eq!(PolynomialHashFamily::polyhash("abcde"), 92_599_395);
        assert_eq!(PolynomialHashFamily::polyhash("hello"), 99_162_322);
    }

    #[test]
    fn polyhash_wraps_to_i32_min() {
        assert_eq!(
            PolynomialHashFamily::polyhash("polygenelubricants"),
            i32::MIN
        );
    }

    #[test]
    fn polynomial_slot_values() {
        let family = PolynomialHashFamily;
        assert_eq!(family.hash("hello", 0, 1000), 322);
        assert_eq!(family.hash("hello", 1, 1000), 353);
        assert_eq!(family.hash("hello", 2, 1000), 384);
    }

    #[test]
    fn polynomial_negative_base_uses_magnitude_of_remainder() {
        let family = PolynomialHashFamily;
        // -2147483648 % 1000 == -648
        assert_eq!(family.hash("polygenelubricants", 0, 1000), 648);
        // -2147483648 + 31 == -2147483617, % 1000 == -617
        assert_eq!(family.hash("polygenelubricants", 1, 1000), 617);
    }

    #[test]
    fn polynomial_extreme_ranges() {
        let family = PolynomialHashFamily;
        for shingle in ["polygenelubricants", "hello", "zzzzz"] {
            for index in [0, 1, 1_000, usize::MAX] {
                assert_eq!(family.hash(shingle, index, 1), 0);
                assert!(family.hash(shingle, index, u32::MAX) < u32::MAX);
            }
        }
    }

    // ==================== Seeded family ====================

    #[test]
    fn seeded_is_deterministic() {
        let family = SeededHashFamily::new(42);
        assert_eq!(family.hash("hello", 7, u32::MAX), family.hash("hello", 7, u32::MAX));
        assert_eq!(family.seed(), 42);
    }

    #[test]
    fn seeded_indices_and_seeds_differ() {
        let a = SeededHashFamily::new(1);
        let b = SeededHashFamily::new(2);
        assert_ne!(a.hash("hello", 0, u32::MAX), a.hash("hello", 1, u32::MAX));
        assert_ne!(a.hash("hello", 0, u32::MAX), b.hash("hello", 0, u32::MAX));
    }

    #[test]
    fn seeded_respects_range() {
        let family = SeededHashFamily::new(7);
        for index in 0..256 {
            assert!(family.hash("shingle", index, 17) < 17);
        }
    }

    #[test]
    fn seeded_slots_well_distributed() {
        let family = SeededHashFamily::new(99);
        let base = family.base_hash("hello");
        let unique: std::collections::HashSet<u32> = (0..100)
            .map(|i| family.slot_hash(base, i, u32::MAX))
            .collect();
        assert!(unique.len() >= 95);
    }

    // ==================== Mixers ====================

    #[test]
    fn mix_u64_different_keys() {
        assert_ne!(mix_u64(12345, 1), mix_u64(12345, 2));
    }

    #[test]
    fn splitmix64_well_distributed() {
        let unique: std::collections::HashSet<u64> = (0..100u64).map(splitmix64).collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn splitmix64_avalanche_effect() {
        let diff_bits = (splitmix64(1000) ^ splitmix64(1001)).count_ones();
        assert!(diff_bits > 16);
    }
}
