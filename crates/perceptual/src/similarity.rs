//! Similarity estimation between signatures, and the exact Jaccard index it
//! approximates.

use crate::config::PerceptualError;
use crate::fingerprint::Signature;
use crate::shingles::ShingleSet;

/// Fraction of positions where `a` and `b` agree.
///
/// Estimates the Jaccard similarity of the two underlying shingle sets.
/// Sentinel slots compare like any other value, so two signatures built from
/// empty sets score `1.0`.
pub fn similarity(a: &Signature, b: &Signature) -> Result<f64, PerceptualError> {
    if a.len() != b.len() {
        return Err(PerceptualError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let matches = a
        .values()
        .iter()
        .zip(b.values())
        .filter(|(x, y)| x == y)
        .count();
    Ok(matches as f64 / a.len() as f64)
}

/// Exact Jaccard index `|a ∩ b| / |a ∪ b|`. Two empty sets score `1.0`.
pub fn jaccard(a: &ShingleSet, b: &ShingleSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|s| large.contains(*s)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
