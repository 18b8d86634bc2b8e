//! The 26-letter partition key used to bucket words.
//!
//! A `Letter` can only be built from an ASCII letter, so every value is a valid
//! bucket index in `0..ALPHABET_SIZE`.

use std::fmt;

/// Number of buckets (lowercase ASCII letters).
pub const ALPHABET_SIZE: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Letter(u8);

impl Letter {
    /// Classify a single byte. Case folding is plain ASCII lowering.
    pub const fn from_byte(b: u8) -> Option<Self> {
        let lower = b.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower - b'a'))
        } else {
            None
        }
    }

    /// Partition key for `word`: its first byte, lowered. `None` for empty words
    /// and words not starting with an ASCII letter.
    pub fn of_word(word: &[u8]) -> Option<Self> {
        word.first().and_then(|&b| Self::from_byte(b))
    }

    /// Build from a bucket index; `None` when `idx >= ALPHABET_SIZE`.
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < ALPHABET_SIZE {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// All letters in ascending order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
