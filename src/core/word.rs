//! Scramble word representation
//!
//! A Word stores a 5-letter target word along with its letter counts for
//! duplicate-aware comparisons.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every playable word
pub const WORD_LEN: usize = 5;

/// A 5-letter scramble target word
///
/// Stores the word as bytes alongside the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use scramble::core::Word;
    ///
    /// let word = Word::new("react").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        // Validate length
        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        // Validate ASCII and alphabetic
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated length == 5
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used for duplicate-aware multiset comparisons against scrambles.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Check whether `candidate` spells this word exactly
    #[inline]
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.text == candidate.to_lowercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("react").unwrap();
        assert_eq!(word.text(), "react");
        assert_eq!(word.chars(), b"react");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("REACT").unwrap();
        assert_eq!(word.text(), "react");

        let word2 = Word::new("ReAcT").unwrap();
        assert_eq!(word2.text(), "react");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("reac7").is_err()); // Number
        assert!(Word::new("reac ").is_err()); // Space
        assert!(Word::new("reac!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("hooks").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'h'), Some(&1));
        assert_eq!(counts.get(&b'o'), Some(&2));
        assert_eq!(counts.get(&b'k'), Some(&1));
        assert_eq!(counts.get(&b's'), Some(&1));
    }

    #[test]
    fn word_letter_counts_all_unique() {
        let word = Word::new("react").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_matches_case_insensitive() {
        let word = Word::new("react").unwrap();
        assert!(word.matches("react"));
        assert!(word.matches("REACT"));
        assert!(!word.matches("trace"));
        assert!(!word.matches("reac"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("react").unwrap();
        assert_eq!(format!("{word}"), "react");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("react").unwrap();
        let word2 = Word::new("react").unwrap();
        let word3 = Word::new("REACT").unwrap();
        let word4 = Word::new("hooks").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
