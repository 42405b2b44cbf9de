//! MinHash computation for NearDup perceptual fingerprinting.
//!
//! This module builds fixed-length MinHash signatures over sets of shingles.
//! Slot `i` holds the minimum, over all shingles, of hash function `i` of the
//! chosen [`HashFamily`]; slots stay at [`SENTINEL`] when no shingle was seen.

use crate::config::PerceptualError;
use crate::family::{HashFamily, PolynomialHashFamily};
use crate::fingerprint::{Signature, SENTINEL};

/// Build a signature with the default [`PolynomialHashFamily`].
///
/// `shingles` is normally a [`ShingleSet`](crate::ShingleSet); repeated
/// items are harmless since only minima are kept.
pub fn build_signature<I, S>(
    shingles: I,
    num_hashes: usize,
    hash_range: u32,
) -> Result<Signature, PerceptualError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_signature_with(shingles, num_hashes, hash_range, &PolynomialHashFamily)
}

/// Build a signature drawing its `num_hashes` functions from `family`.
pub fn build_signature_with<I, S, F>(
    shingles: I,
    num_hashes: usize,
    hash_range: u32,
    family: &F,
) -> Result<Signature, PerceptualError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: HashFamily + ?Sized,
{
    if num_hashes == 0 {
        return Err(PerceptualError::InvalidNumHashes { num_hashes });
    }
    if hash_range == 0 {
        return Err(PerceptualError::InvalidHashRange { hash_range });
    }

    let mut slots = vec![SENTINEL; num_hashes];
    for shingle in shingles {
        // One base hash per shingle; the per-index derivation is cheap.
        let base = family.base_hash(shingle.as_ref());
        for (index, slot) in slots.iter_mut().enumerate() {
            let h = family.slot_hash(base, index, hash_range);
            if h < *slot {
                *slot = h;
            }
        }
    }

    Ok(Signature::from_slots(slots))
}
