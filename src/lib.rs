//! Scramble
//!
//! A word-scramble game: unscramble a shuffled 5-letter word by dragging its
//! letters into place (TUI mode) or typing the answer (CLI mode). Three
//! strikes end the game; a small supply of passes skips words for free.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble::core::{Word, scramble_word_with};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let word = Word::new("react").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // A scramble is a permutation of the target's letters
//! let scrambled = scramble_word_with(&word, &mut rng);
//! assert_eq!(scrambled.len(), 5);
//! ```

// Core domain types
pub mod core;

// Game state machine and controller
pub mod game;

// Word sources
pub mod words;

// Persistence port
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
