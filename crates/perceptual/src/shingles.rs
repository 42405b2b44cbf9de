//! Character shingling for NearDup perceptual fingerprinting.
//!
//! A shingle is a window of exactly `shingle_size` consecutive characters of
//! canonical text. Windows are cut on `char` boundaries, so arbitrary UTF-8
//! input is safe even though canonical text is always ASCII.

use fxhash::FxHashSet;

use crate::config::PerceptualError;

/// Unordered set of unique shingles drawn from one canonical text.
pub type ShingleSet = FxHashSet<String>;

/// Every window of `shingle_size` characters, in order, duplicates kept.
///
/// Text shorter than `shingle_size` yields an empty sequence.
pub fn shingle_sequence(
    canonical_text: &str,
    shingle_size: usize,
) -> Result<Vec<&str>, PerceptualError> {
    if shingle_size == 0 {
        return Err(PerceptualError::InvalidShingleSize { shingle_size });
    }

    // Byte offset of every char start, plus the end of the string.
    let mut bounds: Vec<usize> = canonical_text.char_indices().map(|(i, _)| i).collect();
    bounds.push(canonical_text.len());

    let char_count = bounds.len() - 1;
    if char_count < shingle_size {
        return Ok(Vec::new());
    }

    let mut out = Vec::with_capacity(char_count - shingle_size + 1);
    for (&start, &end) in bounds.iter().zip(bounds.iter().skip(shingle_size)) {
        out.push(&canonical_text[start..end]);
    }
    Ok(out)
}

/// Collapse the shingle sequence of `canonical_text` into a set.
pub fn shingles(canonical_text: &str, shingle_size: usize) -> Result<ShingleSet, PerceptualError> {
    let sequence = shingle_sequence(canonical_text, shingle_size)?;
    let mut set = ShingleSet::default();
    set.reserve(sequence.len());
    set.extend(sequence.into_iter().map(str::to_owned));
    Ok(set)
}
