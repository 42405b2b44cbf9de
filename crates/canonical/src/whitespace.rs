//! Whitespace normalization utilities.
//!
//! # Whitespace Definition
//!
//! Canonicalization only recognizes the ASCII whitespace class:
//! - space (U+0020)
//! - tab (U+0009)
//! - newline (U+000A)
//! - vertical tab (U+000B)
//! - form feed (U+000C)
//! - carriage return (U+000D)
//!
//! Other Unicode spaces (for example U+00A0) are not whitespace here; the
//! canonicalizer drops them like any other non-ASCII character.
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! let normalized = collapse_whitespace("  hello   world  ");
//! assert_eq!(normalized, "hello world");
//! ```

/// Returns `true` for the characters canonicalization treats as whitespace.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Collapses repeated whitespace and trims edges, leaving every other
/// character untouched.
///
/// Useful for callers that want whitespace-normalized text without running
/// the full canonicalizer.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello\r\n\tworld"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// // Not ASCII whitespace, so it is kept as-is.
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello\u{00A0}world");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split(is_whitespace).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_runs() {
        assert_eq!(collapse_whitespace("hello \t \x0B world"), "hello world");
        assert_eq!(collapse_whitespace("a\x0Cb"), "a b");
    }

    #[test]
    fn keeps_case_and_symbols() {
        assert_eq!(collapse_whitespace("  Hello,   World! "), "Hello, World!");
    }

    #[test]
    fn ascii_class_only() {
        assert!(is_whitespace('\x0B'));
        assert!(!is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('\u{2003}'));
    }
}
