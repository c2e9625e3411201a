//! Game state, events and effects
//!
//! The whole game is an explicit state object plus a pure reducer (see
//! [`crate::game::reduce`]): frontends translate gestures into [`GameEvent`]s
//! and render [`GameState`] snapshots, never mutating state themselves.

use crate::core::{Arrangement, Word, scramble_word_with};
use rand::Rng;

/// Strikes that end the game
pub const STRIKE_LIMIT: u32 = 3;

/// Passes handed out at the start of each game
pub const INITIAL_PASSES: u32 = 3;

/// Score counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub points: u32,
    pub strikes: u32,
    pub passes: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            points: 0,
            strikes: 0,
            passes: INITIAL_PASSES,
        }
    }
}

/// Complete game state
///
/// The queue head is always the active target, and `scrambled` is always a
/// permutation of it - both are replaced together whenever the head changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub queue: Vec<Word>,
    pub scrambled: String,
    pub arrangement: Arrangement,
    pub scores: Scoreboard,
    /// Word-refill request generation; stale loads are discarded
    pub generation: u64,
}

impl GameState {
    /// Build a fresh state over a word queue, scrambling the head
    pub fn new<R: Rng + ?Sized>(queue: Vec<Word>, rng: &mut R) -> Self {
        let mut state = Self {
            queue,
            scrambled: String::new(),
            arrangement: Arrangement::new(0),
            scores: Scoreboard::default(),
            generation: 0,
        };
        state.rescramble(rng);
        state
    }

    /// Build a state restored from persistence
    pub fn restored<R: Rng + ?Sized>(
        queue: Vec<Word>,
        points: u32,
        strikes: u32,
        rng: &mut R,
    ) -> Self {
        let mut state = Self::new(queue, rng);
        state.scores.points = points;
        state.scores.strikes = strikes;
        state
    }

    /// The active target word, if any
    #[must_use]
    pub fn active_word(&self) -> Option<&Word> {
        self.queue.first()
    }

    /// Terminal condition: the queue is exhausted or the strike limit is hit
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.queue.is_empty() || self.scores.strikes >= STRIKE_LIMIT
    }

    /// Regenerate the scramble and a matching empty arrangement for the
    /// current queue head
    pub(crate) fn rescramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.queue.first() {
            Some(word) => {
                self.scrambled = scramble_word_with(word, rng);
                self.arrangement = Arrangement::new(self.scrambled.len());
            }
            None => {
                self.scrambled.clear();
                self.arrangement = Arrangement::new(0);
            }
        }
    }
}

/// Player gestures and collaborator callbacks, as seen by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Drag started on the scramble slot
    PickUp { slot: usize },
    /// Drag released at pointer offset `x` within a drop zone of `zone_width`
    Drop { x: u16, zone_width: u16 },
    /// Submit the arranged letters as the candidate word
    Submit,
    /// Submit a typed candidate word
    Guess(String),
    /// Skip the current word, consuming a pass
    Pass,
    /// Start over: fresh scores, fresh queue
    Reset,
    /// A word source delivered a refill for the given request generation
    WordsLoaded { generation: u64, words: Vec<Word> },
}

/// Work the reducer asks the controller to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the current words/points/strikes
    Persist,
    /// Ask the word source for a fresh queue, stamped with a generation
    RequestWords { generation: u64 },
    /// Surface a message to the player
    Feedback(Feedback),
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub style: FeedbackStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    Info,
    Success,
    Error,
}

impl Feedback {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FeedbackStyle::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FeedbackStyle::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FeedbackStyle::Error,
        }
    }
}
