//! Configuration and error types for NearDup perceptual fingerprinting.
//!
//! This module defines the public configuration surface for the perceptual
//! layer. It is intentionally free of any I/O or environment-dependent
//! behavior so that a signature is a pure function of
//! `(canonical_text, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which hash family the signature builder draws its functions from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HashFamilyKind {
    /// `|(polyhash(shingle) + i * 31) mod range|`.
    ///
    /// Every function is an offset of one base hash, so slot minima are
    /// correlated and estimates are biased. Kept as the default because
    /// existing reference scores were produced with it.
    #[default]
    Polynomial,
    /// Seeded xxh3 base hash with a splitmix64-derived key per function.
    Seeded,
}

/// Semantic configuration for the perceptual fingerprinting pipeline.
///
/// The perceptual layer **only** works over canonical text produced by the
/// upstream canonicalizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualConfig {
    /// Configuration schema version.
    ///
    /// Any algorithmic change that can affect the signature must bump this
    /// version, so that old signatures remain replayable and comparable.
    pub version: u32,
    /// Width of the sliding window in characters.
    ///
    /// Controls sensitivity to local edits: a single changed character
    /// touches up to `shingle_size` shingles.
    pub shingle_size: usize,
    /// Number of hash functions, i.e. the signature length.
    ///
    /// Controls estimator variance. Signatures are only comparable when
    /// built with the same value.
    pub num_hashes: usize,
    /// Modulus bounding every hash output.
    ///
    /// Small ranges make unrelated minima collide more often and bias the
    /// estimate upwards.
    pub hash_range: u32,
    /// Hash family used to build signatures.
    pub hash_family: HashFamilyKind,
    /// Seed for [`HashFamilyKind::Seeded`]. Ignored by the polynomial family.
    pub seed: u64,
}

impl PerceptualConfig {
    /// Create a new configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shingle width in characters. Typical values: 3-9.
    pub fn with_shingle_size(mut self, shingle_size: usize) -> Self {
        self.shingle_size = shingle_size;
        self
    }

    /// Set the number of hash functions (signature length).
    /// The standard error of the estimate shrinks with `1/sqrt(num_hashes)`.
    pub fn with_num_hashes(mut self, num_hashes: usize) -> Self {
        self.num_hashes = num_hashes;
        self
    }

    /// Set the modulus bounding hash outputs.
    pub fn with_hash_range(mut self, hash_range: u32) -> Self {
        self.hash_range = hash_range;
        self
    }

    /// Select the hash family.
    pub fn with_hash_family(mut self, hash_family: HashFamilyKind) -> Self {
        self.hash_family = hash_family;
        self
    }

    /// Set the seed used by the seeded family.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.shingle_size < 1 {
            return Err(PerceptualError::InvalidShingleSize {
                shingle_size: self.shingle_size,
            });
        }
        if self.num_hashes < 1 {
            return Err(PerceptualError::InvalidNumHashes {
                num_hashes: self.num_hashes,
            });
        }
        if self.hash_range < 1 {
            return Err(PerceptualError::InvalidHashRange {
                hash_range: self.hash_range,
            });
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            shingle_size: 5,
            num_hashes: 500,
            hash_range: 1000,
            hash_family: HashFamilyKind::Polynomial,
            seed: 0xF00D_BAAD_F00D_BAAD,
        }
    }
}

/// Errors returned by the perceptual fingerprinting pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid argument: shingle_size must be >= 1 (got {shingle_size})")]
    InvalidShingleSize { shingle_size: usize },

    #[error("invalid argument: num_hashes must be >= 1 (got {num_hashes})")]
    InvalidNumHashes { num_hashes: usize },

    #[error("invalid argument: hash_range must be >= 1 (got {hash_range})")]
    InvalidHashRange { hash_range: u32 },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    #[error("signature length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

impl PerceptualError {
    /// `true` for every variant caused by a bad parameter value, as opposed
    /// to comparing incompatible signatures.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, PerceptualError::LengthMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = PerceptualConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.shingle_size, 5);
        assert_eq!(cfg.num_hashes, 500);
        assert_eq!(cfg.hash_range, 1000);
        assert_eq!(cfg.hash_family, HashFamilyKind::Polynomial);
        assert_eq!(cfg.seed, 0xF00D_BAAD_F00D_BAAD);
    }

    #[test]
    fn config_new_creates_default() {
        assert_eq!(PerceptualConfig::new(), PerceptualConfig::default());
    }

    #[test]
    fn config_builder_chain() {
        let cfg = PerceptualConfig::new()
            .with_shingle_size(3)
            .with_num_hashes(64)
            .with_hash_range(u32::MAX)
            .with_hash_family(HashFamilyKind::Seeded)
            .with_seed(42);

        assert_eq!(cfg.shingle_size, 3);
        assert_eq!(cfg.num_hashes, 64);
        assert_eq!(cfg.hash_range, u32::MAX);
        assert_eq!(cfg.hash_family, HashFamilyKind::Seeded);
        assert_eq!(cfg.seed, 42);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_validate_rejects_zeroes() {
        assert_eq!(
            PerceptualConfig::new().with_shingle_size(0).validate(),
            Err(PerceptualError::InvalidShingleSize { shingle_size: 0 })
        );
        assert_eq!(
            PerceptualConfig::new().with_num_hashes(0).validate(),
            Err(PerceptualError::InvalidNumHashes { num_hashes: 0 })
        );
        assert_eq!(
            PerceptualConfig::new().with_hash_range(0).validate(),
            Err(PerceptualError::InvalidHashRange { hash_range: 0 })
        );
        let cfg = PerceptualConfig {
            version: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigVersion { version: 0 })
        );
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = PerceptualConfig::new()
            .with_shingle_size(4)
            .with_hash_family(HashFamilyKind::Seeded)
            .with_seed(12345);

        let serialized = serde_json::to_string(&cfg).unwrap();
        assert!(serialized.contains("\"hash_family\":\"seeded\""));
        let deserialized: PerceptualConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn error_display() {
        let err = PerceptualError::InvalidShingleSize { shingle_size: 0 };
        assert!(err.to_string().contains("invalid argument"));
        assert!(err.to_string().contains("shingle_size must be >= 1"));

        let err = PerceptualError::LengthMismatch {
            left: 10,
            right: 20,
        };
        assert_eq!(err.to_string(), "signature length mismatch: 10 vs 20");
    }

    #[test]
    fn error_classification() {
        assert!(PerceptualError::InvalidHashRange { hash_range: 0 }.is_invalid_argument());
        assert!(PerceptualError::InvalidNumHashes { num_hashes: 0 }.is_invalid_argument());
        assert!(!PerceptualError::LengthMismatch { left: 1, right: 2 }.is_invalid_argument());
    }
}
