use crate::whitespace::is_whitespace;

/// Main entry point. Takes raw text and returns its canonical form.
///
/// Whitespace runs become a single ASCII space, letters are lowercased,
/// anything outside `[A-Za-z0-9]` and whitespace is dropped, and the edges
/// are trimmed. The collapse is applied to the filtered stream, so removing
/// an isolated symbol (`"a - b"`) never leaves two spaces behind.
pub fn canonicalize(text: &str) -> String {
    let mut canonical_text = String::with_capacity(text.len());
    // A separator is only emitted once the next kept character shows up,
    // which takes care of both collapsing and trimming.
    let mut pending_space = false;

    for ch in text.chars() {
        if is_whitespace(ch) {
            pending_space = !canonical_text.is_empty();
            continue;
        }
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        if pending_space {
            canonical_text.push(' ');
            pending_space = false;
        }
        canonical_text.push(ch.to_ascii_lowercase());
    }

    canonical_text
}

/// Returns `true` when `text` already satisfies the canonical text invariant.
pub fn is_canonical(text: &str) -> bool {
    if text.starts_with(' ') || text.ends_with(' ') || text.contains("  ") {
        return false;
    }
    text.bytes()
        .all(|b| b == b' ' || b.is_ascii_lowercase() || b.is_ascii_digit())
}
