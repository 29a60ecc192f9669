//! Emoji extraction from arbitrary Unicode text.
//!
//! Walks the code point stream of a text value, groups adjacent code points
//! into candidate emoji runs, and resolves each run against a reference set
//! of known emoji sequences by greedy longest-prefix matching with
//! backtracking. Each recognized emoji is reported as its `-`-joined
//! lowercase-hex code point key; the plain text between emoji is returned
//! alongside, verbatim and in order.
//!
//! ```
//! let parsed = emoji_parse::get_codepoints("Hello, 😀");
//!
//! assert_eq!(parsed.codepoints, ["1f600"]);
//! assert_eq!(parsed.source_split, ["Hello, "]);
//! ```
//!
//! Parsing is a pure function of the input and the immutable reference set;
//! calls share no mutable state and may run concurrently without locking.

mod codepoint;
mod decode;
mod matcher;
mod split;

pub use codepoint::{CodePoint, CompositeKey, KeyError};

use std::collections::HashSet;

use smol_str::SmolStr;

/// Read-only membership query over the set of recognized emoji sequences.
///
/// The matcher needs nothing else from it: no iteration, no mutation. Keys
/// are in [`CompositeKey`] form.
pub trait ReferenceSet {
    fn contains(&self, key: &str) -> bool;
}

/// The bundled [`emoji_db`] table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

impl ReferenceSet for Standard {
    #[inline]
    fn contains(&self, key: &str) -> bool {
        emoji_db::contains(key)
    }
}

impl ReferenceSet for HashSet<String> {
    #[inline]
    fn contains(&self, key: &str) -> bool {
        HashSet::contains(self, key)
    }
}

impl ReferenceSet for HashSet<SmolStr> {
    #[inline]
    fn contains(&self, key: &str) -> bool {
        HashSet::contains(self, key)
    }
}

impl<S: ReferenceSet + ?Sized> ReferenceSet for &S {
    #[inline]
    fn contains(&self, key: &str) -> bool {
        S::contains(self, key)
    }
}

/// Everything one parse extracts from a text value.
///
/// `codepoints` and `source_split` are independently ordered by position in
/// the input; their lengths have no fixed relation. Interleaving the
/// fragments with the original substrings of the matched emoji, in input
/// order, reconstructs the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEmojis {
    /// Matched emoji keys, in order of appearance.
    pub codepoints: Vec<CompositeKey>,
    /// Non-empty plain-text fragments between and around the emoji, in
    /// order of appearance.
    pub source_split: Vec<SmolStr>,
}

impl ParsedEmojis {
    /// No emoji and no plain text at all.
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty() && self.source_split.is_empty()
    }
}

/// An emoji matcher over an injected [`ReferenceSet`].
#[derive(Debug, Clone, Default)]
pub struct EmojiParser<S = Standard> {
    set: S,
}

impl EmojiParser {
    /// A parser over the bundled table.
    pub const fn new() -> Self {
        EmojiParser { set: Standard }
    }
}

impl<S: ReferenceSet> EmojiParser<S> {
    pub const fn with_set(set: S) -> Self {
        EmojiParser { set }
    }

    /// Extracts every recognized emoji from `text`, along with the plain
    /// fragments around them.
    ///
    /// Total: every input, including the empty string and text with no
    /// emoji or no reference-set matches at all, yields a (possibly empty)
    /// result. Candidate runs the reference set rejects are silently
    /// omitted from `codepoints`; their characters still appear in
    /// `source_split`'s view of the raw text.
    pub fn parse(&self, text: &str) -> ParsedEmojis {
        ParsedEmojis {
            codepoints: matcher::match_text(&self.set, text.chars().map(CodePoint::from)),
            source_split: split::source_split(text),
        }
    }

    /// Like [`parse`](Self::parse), but over UTF-16 code units.
    ///
    /// Surrogate pairs count as one code point. An unpaired surrogate is
    /// decoded as U+FFFD REPLACEMENT CHARACTER, which lands in candidate
    /// territory and is then rejected by any sane reference set.
    pub fn parse_utf16(&self, units: &[u16]) -> ParsedEmojis {
        self.parse(&decode::decode_utf16_lossy(units))
    }
}

/// Extracts every recognized emoji from `text` using the bundled table.
///
/// Convenience for [`EmojiParser::new().parse(text)`](EmojiParser::parse).
pub fn get_codepoints(text: &str) -> ParsedEmojis {
    EmojiParser::new().parse(text)
}
