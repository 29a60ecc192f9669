use core::fmt::{self, Write};
use core::ops::Deref;
use core::str::FromStr;

use smol_str::SmolStr;

/// A single Unicode scalar value.
///
/// Renders as its token form: lowercase hexadecimal, no `U+` prefix, no
/// zero padding beyond the significant digits. Two code points are equal
/// iff their tokens are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    pub const MAX: u32 = 0x10FFFF;

    /// Scalar values below this threshold are boundary markers; everything
    /// at or above it is a candidate emoji code point.
    pub const BOUNDARY: u32 = 0x1000;

    /// # Panics
    ///
    /// Panics if `value` exceeds [`CodePoint::MAX`].
    pub const fn new(value: u32) -> Self {
        assert!(value <= Self::MAX);
        CodePoint(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this code point terminates a candidate emoji run.
    ///
    /// The rule is a plain numeric comparison against `0x1000`: Basic Latin,
    /// Latin-1 and the other low-range text/punctuation/whitespace blocks
    /// are boundaries, while everything from U+1000 up, including skin-tone
    /// modifiers, ZWJ (U+200D), variation selectors (U+FE0F) and regional
    /// indicators, accumulates into a run. Deliberately coarse; the
    /// reference set rejects runs that are not actually emoji.
    pub const fn is_boundary(self) -> bool {
        self.0 < Self::BOUNDARY
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// An ordered emoji code point sequence in its canonical textual form:
/// tokens joined with `-`, e.g. `"1f468-1f3ff-200d-1f680"`.
///
/// This is both the lookup key into a [`ReferenceSet`](crate::ReferenceSet)
/// and the identifier emitted for a matched emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(SmolStr);

impl CompositeKey {
    /// Joins a run of code points into a key.
    pub fn join(points: &[CodePoint]) -> Self {
        let mut key = String::with_capacity(points.len() * 6);

        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                key.push('-');
            }

            // writing to a String cannot fail
            let _ = write!(key, "{point}");
        }

        CompositeKey(SmolStr::from(key))
    }

    /// Validates a caller-supplied key: one or more `-`-separated tokens,
    /// each a lowercase hexadecimal scalar value with no zero padding and
    /// no larger than U+10FFFF.
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.is_empty() {
            return Err(KeyError::Empty);
        }

        for (i, token) in s.split('-').enumerate() {
            if token.is_empty() {
                return Err(KeyError::EmptyToken(i));
            }

            let canonical = token.len() == 1 || !token.starts_with('0');
            if !canonical || !token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
                return Err(KeyError::InvalidToken(SmolStr::new(token), i));
            }

            match u32::from_str_radix(token, 16) {
                Ok(value) if value <= CodePoint::MAX => {}
                _ => return Err(KeyError::OutOfRange(SmolStr::new(token), i)),
            }
        }

        Ok(CompositeKey(SmolStr::new(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CompositeKey {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompositeKey {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CompositeKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        CompositeKey::parse(s)
    }
}

impl PartialEq<str> for CompositeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CompositeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// The key contained no tokens at all
    #[error("empty key")]
    Empty,
    /// A `-` separator with nothing on one side of it
    #[error("empty token at position {0}")]
    EmptyToken(usize),
    /// A token that is not unpadded lowercase hexadecimal
    #[error("invalid token {0:?} at position {1}")]
    InvalidToken(SmolStr, usize),
    /// A token above U+10FFFF
    #[error("token {0:?} at position {1} exceeds U+10FFFF")]
    OutOfRange(SmolStr, usize),
}
