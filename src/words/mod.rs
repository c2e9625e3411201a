//! Word sources for the scramble game
//!
//! The game pulls its queue through the [`WordSource`] trait; implementations
//! cover the embedded built-in list and newline-delimited files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::io;
use std::path::PathBuf;

/// A collaborator that can provide a batch of playable words
///
/// A failed refill must leave the caller free to keep its prior state; the
/// game reports the failure and stays interactive.
pub trait WordSource {
    /// Produce a fresh batch of words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying source cannot be read.
    fn refill(&mut self) -> io::Result<Vec<Word>>;
}

/// The built-in word list compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl WordSource for BuiltinSource {
    fn refill(&mut self) -> io::Result<Vec<Word>> {
        Ok(loader::words_from_slice(WORDS))
    }
}

/// A newline-delimited word list file, re-read on every refill
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn refill(&mut self) -> io::Result<Vec<Word>> {
        loader::load_from_file(&self.path)
    }
}

/// Enum wrapper for all source types
///
/// Allows runtime selection of the word source while maintaining static
/// dispatch.
pub enum SourceKind {
    Builtin(BuiltinSource),
    File(FileSource),
}

impl SourceKind {
    /// Create a source from the `-w` flag value
    ///
    /// "builtin" selects the embedded list; anything else is treated as a
    /// file path.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "builtin" => Self::Builtin(BuiltinSource),
            path => Self::File(FileSource::new(path)),
        }
    }
}

impl WordSource for SourceKind {
    fn refill(&mut self) -> io::Result<Vec<Word>> {
        match self {
            Self::Builtin(s) => s.refill(),
            Self::File(s) => s.refill(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All built-in words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_source_returns_every_word() {
        let mut source = BuiltinSource;
        let words = source.refill().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
    }

    #[test]
    fn source_kind_from_flag() {
        assert!(matches!(
            SourceKind::from_flag("builtin"),
            SourceKind::Builtin(_)
        ));
        assert!(matches!(
            SourceKind::from_flag("my/words.txt"),
            SourceKind::File(_)
        ));
    }

    #[test]
    fn missing_file_source_errors() {
        let mut source = FileSource::new("definitely/not/here.txt");
        assert!(source.refill().is_err());
    }
}
