//! Persistence port
//!
//! The game saves its words, points and strikes through the [`Store`] trait
//! on every scoring or queue change, and reads them back on start-up.
//! Missing or malformed stored data falls back to defaults rather than
//! failing the game.

mod json;

pub use json::JsonFileStore;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// The persisted slice of game state
///
/// Passes are intentionally absent: every session starts with a full
/// allotment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub words: Vec<String>,
    pub points: u32,
    pub strikes: u32,
}

/// Error type for store writes
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// A key-value collaborator persisting game progress
pub trait Store {
    /// Read the saved game, if a usable one exists
    ///
    /// Malformed or missing data yields `None`; the caller falls back to
    /// defaults.
    fn load(&self) -> Option<SavedGame>;

    /// Write the saved game
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data cannot be serialized or written.
    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError>;
}

/// In-memory store: used by tests and by `--no-save`
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<SavedGame>,
}

impl MemoryStore {
    /// Start with existing saved data, as if read from disk
    #[must_use]
    pub fn with_saved(saved: SavedGame) -> Self {
        Self { saved: Some(saved) }
    }

    /// The currently held saved game
    #[must_use]
    pub fn saved(&self) -> Option<&SavedGame> {
        self.saved.as_ref()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Option<SavedGame> {
        self.saved.clone()
    }

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        self.saved = Some(saved.clone());
        Ok(())
    }
}

/// Enum wrapper for all store types
///
/// Allows runtime selection of the store while maintaining static dispatch.
pub enum StoreKind {
    Json(JsonFileStore),
    Memory(MemoryStore),
}

impl Store for StoreKind {
    fn load(&self) -> Option<SavedGame> {
        match self {
            Self::Json(s) => s.load(),
            Self::Memory(s) => s.load(),
        }
    }

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        match self {
            Self::Json(s) => s.save(saved),
            Self::Memory(s) => s.save(saved),
        }
    }
}
