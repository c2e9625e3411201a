//! Core domain types for the scramble game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond the RNG. All types here are pure and testable.

mod arrangement;
mod scramble;
mod word;

pub use arrangement::{ArrangeError, ArrangePhase, Arrangement, DragPayload, PlacedLetter};
pub use scramble::{scramble_word, scramble_word_with, shuffle, shuffle_with};
pub use word::{WORD_LEN, Word, WordError};
