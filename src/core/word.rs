//! Word representation
//!
//! A `Word` is a lowercase ASCII word whose length matches the active mode.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated lowercase word of a fixed length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// Input is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_ranks::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cat", 5).is_err());
    /// assert!(Word::new("c4t", 3).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the word, returning the owned text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Count of each letter in `text`
///
/// Used for scoring with duplicate letters.
#[inline]
pub(crate) fn char_counts(text: &[u8]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &ch in text {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("planet", 6).unwrap();
        assert_eq!(word.text(), "planet");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_normalized() {
        assert_eq!(Word::new("CAT", 3).unwrap().text(), "cat");
        assert_eq!(Word::new("  Kite\n", 4).unwrap().text(), "kite");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("apple", 4),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
        assert!(matches!(
            Word::new("", 3),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t", 3), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("a-b", 3), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café", 4), Err(WordError::NonAscii));
    }

    #[test]
    fn char_counts_duplicates() {
        let counts = char_counts(b"speed");
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("kite", 4).unwrap();
        assert_eq!(format!("{word}"), "kite");
    }

    #[test]
    fn word_error_messages() {
        let err = Word::new("apple", 4).unwrap_err();
        assert_eq!(err.to_string(), "Word must be exactly 4 letters, got 5");
        let boxed: Box<dyn std::error::Error> = Box::new(WordError::NonAscii);
        assert_eq!(boxed.to_string(), "Word must contain only ASCII letters");
    }
}
