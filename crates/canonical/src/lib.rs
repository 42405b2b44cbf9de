//! NearDup canonical text layer.
//!
//! This crate turns raw text into the comparable form every downstream stage
//! (shingling, MinHash, similarity) relies on.
//!
//! ## What we do
//!
//! - Whitespace normalization (runs collapse to a single ASCII space)
//! - ASCII lowercasing
//! - Removal of everything that is not an ASCII letter, digit or whitespace
//! - Trimming of leading and trailing whitespace
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Give us the same text,
//! you get the same canonical text on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Output contains only `[a-z0-9 ]`
//! - No two spaces are adjacent, and there is none at either edge
//! - `canonicalize(canonicalize(x)) == canonicalize(x)`
//! - Empty input (or input with nothing to keep) yields `""`, never an error
//!
//! ## Example
//!
//! ```
//! use canonical::canonicalize;
//!
//! assert_eq!(canonicalize("  The   Cat,\tSAT! "), "the cat sat");
//! assert_eq!(canonicalize(""), "");
//! ```

mod hash;
mod pipeline;
mod whitespace;

pub use crate::hash::{hash_canonical_bytes, hash_text};
pub use crate::pipeline::{canonicalize, is_canonical};
pub use crate::whitespace::{collapse_whitespace, is_whitespace};

/// Version of the canonicalization rules implemented by this crate.
///
/// Any change that can alter canonical output must bump this so identity
/// hashes from different rule sets never collide.
pub const CANONICAL_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_canonicalize_default() {
        let input = "  HAcllo\nWORLD!  This is   NearDup. ";
        assert_eq!(canonicalize(input), "hacllo world this is neardup");
    }

    #[test]
    fn case_and_whitespace_invariance() {
        assert_eq!(canonicalize("The  Cat"), canonicalize("the cat"));
        assert_eq!(canonicalize("The\r\n\tCat"), "the cat");
    }

    #[test]
    fn punctuation_and_non_ascii_removed() {
        let input = "There can\u{2019}t be any large-scale revolution, until there\u{2019}s one.";
        assert_eq!(
            canonicalize(input),
            "there cant be any largescale revolution until theres one"
        );
        assert_eq!(canonicalize("Caf\u{00E9} 100%"), "caf 100");
    }

    #[test]
    fn isolated_punctuation_leaves_single_space() {
        assert_eq!(canonicalize("a - b"), "a b");
        assert_eq!(canonicalize("a -\u{00A0}- b"), "a b");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   \n\t "), "");
        assert_eq!(canonicalize("?!... \u{1f600}"), "");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let inputs = [
            "",
            "hello",
            "  Hello,   World!  ",
            "a - b -- c",
            "Tabs\tand\nnewlines\r\nand\x0bvertical\x0cfeeds",
            "mixed \u{00A0} unicode \u{2003} spaces \u{00E9}t\u{00E9}",
            "The most important kind of freedom is to be what you really are.",
        ];

        for input in inputs {
            let once = canonicalize(input);
            let twice = canonicalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
            assert!(is_canonical(&once), "not canonical: {once:?}");
        }
    }

    #[test]
    fn canonical_hash_includes_version() {
        let text = canonicalize("Same text");
        let v1 = hash_canonical_bytes(CANONICAL_VERSION, text.as_bytes());
        let v2 = hash_canonical_bytes(CANONICAL_VERSION + 1, text.as_bytes());
        assert_ne!(v1, v2);
    }

    #[test]
    fn hash_text_determinism() {
        let texts = ["", "hello world", "emoji \u{1f600}"];

        for text in texts {
            assert_eq!(hash_text(text), hash_text(text));
        }
    }
}
