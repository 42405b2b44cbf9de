//! Signature and fingerprint types for the NearDup perceptual layer.
//!
//! The signature schema and metadata are part of the public contract: any
//! incompatible change must result in a new `perceptual_version`.

use serde::{Deserialize, Serialize};

use crate::config::{HashFamilyKind, PerceptualError};
use crate::similarity::similarity;

/// Slot value meaning "no shingle seen".
///
/// Every real hash is `< hash_range <= u32::MAX`, so this never collides
/// with one.
pub const SENTINEL: u32 = u32::MAX;

/// Fixed-length MinHash signature.
///
/// Length is fixed at construction and is never zero; signatures of
/// different lengths are not comparable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Signature {
    values: Vec<u32>,
}

impl Signature {
    pub(crate) fn from_slots(values: Vec<u32>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// Per-function minima, in function order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of hash functions the signature was built with.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed signature.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `true` when every slot is still [`SENTINEL`], i.e. the signature was
    /// built from an empty shingle set.
    pub fn is_vacant(&self) -> bool {
        self.values.iter().all(|&v| v == SENTINEL)
    }

    /// Estimated Jaccard similarity against `other`. See [`similarity`].
    pub fn similarity(&self, other: &Signature) -> Result<f64, PerceptualError> {
        similarity(self, other)
    }
}

impl TryFrom<Vec<u32>> for Signature {
    type Error = PerceptualError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(PerceptualError::InvalidNumHashes { num_hashes: 0 });
        }
        Ok(Self { values })
    }
}

impl From<Signature> for Vec<u32> {
    fn from(signature: Signature) -> Self {
        signature.values
    }
}

/// Final perceptual fingerprint artifact.
///
/// Produced **only** from canonical text and a
/// [`crate::config::PerceptualConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualFingerprint {
    /// MinHash signature over the unique shingles.
    pub signature: Signature,
    /// Number of unique shingles the signature summarizes.
    pub shingle_count: usize,
    /// How, and with which configuration, the fingerprint was produced.
    pub meta: PerceptualMeta,
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualMeta {
    /// Perceptual algorithm version owned by this crate.
    pub perceptual_version: u16,
    /// Human-readable algorithm identifier (e.g. "charshingle_polyoffset_minhash_v1").
    pub algorithm_name: String,
    pub shingle_size: usize,
    pub num_hashes: usize,
    pub hash_range: u32,
    pub hash_family: HashFamilyKind,
    pub seed: u64,
    /// Configuration schema version supplied when computing this fingerprint.
    pub config_version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_rejects_empty() {
        assert_eq!(
            Signature::try_from(Vec::<u32>::new()),
            Err(PerceptualError::InvalidNumHashes { num_hashes: 0 })
        );
        let sig = Signature::try_from(vec![1u32, 2, 3]).unwrap();
        assert_eq!(sig.values(), &[1, 2, 3]);
        assert!(!sig.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let sig = Signature::try_from(vec![5, SENTINEL]).unwrap();
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, "[5,4294967295]");
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn deserializing_empty_fails() {
        assert!(serde_json::from_str::<Signature>("[]").is_err());
    }

    #[test]
    fn vacant_detection() {
        assert!(Signature::try_from(vec![SENTINEL; 4]).unwrap().is_vacant());
        assert!(!Signature::try_from(vec![SENTINEL, 0]).unwrap().is_vacant());
    }

    #[test]
    fn into_vec() {
        let values: Vec<u32> = Signature::try_from(vec![9u32, 8]).unwrap().into();
        assert_eq!(values, vec![9, 8]);
    }
}
