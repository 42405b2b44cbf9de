//! # NearDup Perceptual Fingerprinting
//!
//! This crate turns canonical text into a compact, similarity-preserving
//! MinHash signature and compares signatures to estimate Jaccard similarity
//! of the underlying shingle sets.
//!
//! ## Contract
//!
//! - The perceptual layer **only** consumes canonical text produced by the
//!   upstream canonicalizer. It never normalizes input itself.
//! - The API is a pure function of `(canonical_text, config)` with no I/O,
//!   no network, and no reliance on clocks or global process state.
//!
//! Invariant: for the same canonical text and the same [`PerceptualConfig`],
//! the signature is bit identical.
//!
//! ## Core Pipeline
//!
//! 1.  **Shingling**: every window of `shingle_size` characters is taken and
//!     the windows are collapsed into a [`ShingleSet`].
//!
//! 2.  **MinHashing**: for each of `num_hashes` functions of a
//!     [`HashFamily`], the minimum hash over the set is recorded, reduced
//!     into `[0, hash_range)`. Slots of an empty set keep [`SENTINEL`].
//!
//! 3.  **Similarity**: the fraction of positions where two signatures agree
//!     estimates the Jaccard index of the two shingle sets.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{build_signature, shingles, similarity};
//!
//! let a = build_signature(&shingles("the quick brown fox", 3).unwrap(), 64, 1000).unwrap();
//! let b = build_signature(&shingles("the quick brown fox", 3).unwrap(), 64, 1000).unwrap();
//! assert_eq!(similarity(&a, &b).unwrap(), 1.0);
//! ```
//!
pub mod config;
pub mod family;
pub mod fingerprint;
mod minhash;
mod shingles;
mod similarity;

pub use crate::config::{HashFamilyKind, PerceptualConfig, PerceptualError};
pub use crate::family::{HashFamily, PolynomialHashFamily, SeededHashFamily};
pub use crate::fingerprint::{PerceptualFingerprint, PerceptualMeta, Signature, SENTINEL};
pub use crate::minhash::{build_signature, build_signature_with};
pub use crate::shingles::{shingle_sequence, shingles, ShingleSet};
pub use crate::similarity::{jaccard, similarity};

/// Current perceptual algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Human-readable algorithm identifier for `family`.
pub fn algorithm_name(family: HashFamilyKind) -> &'static str {
    match family {
        HashFamilyKind::Polynomial => "charshingle_polyoffset_minhash_v1",
        HashFamilyKind::Seeded => "charshingle_xxh3seeded_minhash_v1",
    }
}

/// Compute a perceptual fingerprint (shingles → MinHash) of canonical text.
///
/// Text shorter than `cfg.shingle_size` is not an error: it yields a
/// signature whose slots are all [`SENTINEL`].
pub fn fingerprint_canonical(
    canonical_text: &str,
    cfg: &PerceptualConfig,
) -> Result<PerceptualFingerprint, PerceptualError> {
    cfg.validate()?;

    let set = shingles(canonical_text, cfg.shingle_size)?;
    let signature = match cfg.hash_family {
        HashFamilyKind::Polynomial => {
            build_signature_with(&set, cfg.num_hashes, cfg.hash_range, &PolynomialHashFamily)?
        }
        HashFamilyKind::Seeded => build_signature_with(
            &set,
            cfg.num_hashes,
            cfg.hash_range,
            &SeededHashFamily::new(cfg.seed),
        )?,
    };

    Ok(PerceptualFingerprint {
        signature,
        shingle_count: set.len(),
        meta: PerceptualMeta {
            perceptual_version: PERCEPTUAL_VERSION,
            algorithm_name: algorithm_name(cfg.hash_family).to_string(),
            shingle_size: cfg.shingle_size,
            num_hashes: cfg.num_hashes,
            hash_range: cfg.hash_range,
            hash_family: cfg.hash_family,
            seed: cfg.seed,
            config_version: cfg.version,
        },
    })
}
