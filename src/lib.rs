//! Workspace umbrella crate for NearDup near-duplicate detection.
//!
//! This crate stitches canonicalization and perceptual fingerprinting
//! together so callers can go from raw text to a similarity score with a
//! single API entry point:
//!
//! raw text → canonical text → shingle set → signature → similarity score
//!
//! ```
//! use neardup::{compare_texts, PerceptualConfig};
//!
//! let cfg = PerceptualConfig::default();
//! let score = compare_texts("The  Cat sat.", "the cat SAT", &cfg).unwrap();
//! assert_eq!(score, 1.0);
//! ```
//!
//! Every call is independent and side-effect free apart from `tracing`
//! events, so callers may fingerprint documents from as many threads as they
//! like and only synchronize when collecting signatures.

pub mod config;

pub use canonical::{
    CANONICAL_VERSION, canonicalize, collapse_whitespace, hash_canonical_bytes, hash_text,
    is_canonical,
};
pub use perceptual::{
    HashFamily, HashFamilyKind, PERCEPTUAL_VERSION, PerceptualConfig, PerceptualError,
    PerceptualFingerprint, PerceptualMeta, PolynomialHashFamily, SENTINEL, SeededHashFamily,
    ShingleSet, Signature, build_signature, build_signature_with, fingerprint_canonical, jaccard,
    shingle_sequence, shingles, similarity,
};

pub use crate::config::{ConfigLoadError, NearDupConfig, PerceptualYamlConfig};

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, info, warn};

/// Errors that can occur while running text through the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("perceptual fingerprinting failed: {0}")]
    Perceptual(#[from] PerceptualError),
}

/// Everything the pipeline knows about one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextFingerprint {
    /// `SHA-256(CANONICAL_VERSION || 0x00 || canonical_text)` as hex.
    pub canonical_sha256: String,
    /// Length of the canonical text in bytes.
    pub canonical_len: usize,
    /// Shingle count, signature and metadata.
    pub perceptual: PerceptualFingerprint,
}

impl TextFingerprint {
    pub fn signature(&self) -> &Signature {
        &self.perceptual.signature
    }

    /// Both documents canonicalize to exactly the same text.
    pub fn is_exact_duplicate(&self, other: &TextFingerprint) -> bool {
        self.canonical_sha256 == other.canonical_sha256
    }

    /// Both fingerprints were built with the same shingle size and hash
    /// family parameters, so their signature slots line up.
    pub fn is_comparable(&self, other: &TextFingerprint) -> bool {
        let (a, b) = (&self.perceptual.meta, &other.perceptual.meta);
        a.shingle_size == b.shingle_size
            && a.hash_family == b.hash_family
            && a.hash_range == b.hash_range
            && (a.hash_family == HashFamilyKind::Polynomial || a.seed == b.seed)
    }

    /// Estimated Jaccard similarity of the two documents' shingle sets.
    pub fn similarity(&self, other: &TextFingerprint) -> Result<f64, PipelineError> {
        compare_fingerprints(self, other)
    }
}

/// Canonicalize `text` and build its fingerprint under `cfg`.
pub fn fingerprint_text(
    text: &str,
    cfg: &PerceptualConfig,
) -> Result<TextFingerprint, PipelineError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "neardup.fingerprint",
        text_len = text.len(),
        shingle_size = cfg.shingle_size,
        num_hashes = cfg.num_hashes,
        hash_family = ?cfg.hash_family
    );
    let _guard = span.enter();

    let canonical_text = canonicalize(text);
    debug!(canonical_len = canonical_text.len(), "canonicalized");

    match fingerprint_canonical(&canonical_text, cfg) {
        Ok(perceptual) => {
            let elapsed_micros = start.elapsed().as_micros();
            if perceptual.signature.is_vacant() {
                debug!(
                    canonical_len = canonical_text.len(),
                    "text shorter than one shingle; signature left at sentinel"
                );
            }
            info!(
                shingle_count = perceptual.shingle_count,
                elapsed_micros, "fingerprint_success"
            );
            Ok(TextFingerprint {
                canonical_sha256: hash_canonical_bytes(
                    CANONICAL_VERSION,
                    canonical_text.as_bytes(),
                ),
                canonical_len: canonical_text.len(),
                perceptual,
            })
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "fingerprint_failure");
            Err(PipelineError::Perceptual(err))
        }
    }
}

/// Compare two fingerprints built with the same `num_hashes`.
pub fn compare_fingerprints(
    a: &TextFingerprint,
    b: &TextFingerprint,
) -> Result<f64, PipelineError> {
    if !a.is_comparable(b) {
        let (ma, mb) = (&a.perceptual.meta, &b.perceptual.meta);
        warn!(
            left_family = ?ma.hash_family,
            right_family = ?mb.hash_family,
            left_range = ma.hash_range,
            right_range = mb.hash_range,
            left_seed = ma.seed,
            right_seed = mb.seed,
            left_shingle_size = ma.shingle_size,
            right_shingle_size = mb.shingle_size,
            "comparing fingerprints built with different parameters"
        );
    }
    match similarity(a.signature(), b.signature()) {
        Ok(score) => {
            debug!(score, exact = a.is_exact_duplicate(b), "compared");
            Ok(score)
        }
        Err(err) => {
            warn!(error = %err, "compare_failure");
            Err(err.into())
        }
    }
}

/// Fingerprint both texts under `cfg` and return their similarity.
pub fn compare_texts(a: &str, b: &str, cfg: &PerceptualConfig) -> Result<f64, PipelineError> {
    let fp_a = fingerprint_text(a, cfg)?;
    let fp_b = fingerprint_text(b, cfg)?;
    compare_fingerprints(&fp_a, &fp_b)
}
