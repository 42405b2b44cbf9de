//! Hashing utilities for canonical text.
//!
//! ## Document Identity Hash
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
//! ```
//!
//! Two documents with the same identity hash are exact duplicates after
//! canonicalization, so callers can skip the MinHash comparison entirely.
//! The version is part of the digest so a change to the canonical rules never
//! makes old and new hashes look equal.
//!
//! ```rust
//! use canonical::{hash_canonical_bytes, hash_text};
//!
//! assert_eq!(hash_text("hello world").len(), 64);
//! assert_eq!(hash_canonical_bytes(1, b"hello world").len(), 64);
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; for canonical identity use [`hash_canonical_bytes`].
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the canonical identity hash for canonical text and version.
///
/// ```rust
/// use canonical::hash_canonical_bytes;
///
/// let hash_v1 = hash_canonical_bytes(1, b"hello world");
/// let hash_v2 = hash_canonical_bytes(2, b"hello world");
/// assert_ne!(hash_v1, hash_v2);
/// assert_eq!(hash_v1, hash_canonical_bytes(1, b"hello world"));
/// ```
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
