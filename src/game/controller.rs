//! Game progression controller
//!
//! Owns the game state and the injected collaborator ports (word source,
//! persistence store, RNG). Frontends hand it events; it runs them through
//! the pure reducer, performs the resulting effects, and returns whatever
//! feedback the player should see.

use super::reducer::reduce;
use super::state::{Effect, Feedback, GameEvent, GameState};
use crate::core::{Word, shuffle_with};
use crate::store::{SavedGame, Store};
use crate::words::WordSource;
use rand::rngs::StdRng;
use std::io;

/// The running game: state plus collaborators
pub struct Game<W: WordSource, S: Store> {
    state: GameState,
    source: W,
    store: S,
    rng: StdRng,
}

impl<W: WordSource, S: Store> Game<W, S> {
    /// Start a game, restoring persisted progress when present
    ///
    /// A stored game with at least one valid word resumes with its words,
    /// points and strikes; anything missing or unusable falls back to a fresh
    /// shuffled queue from the word source.
    ///
    /// # Errors
    ///
    /// Returns an error only if a fresh queue is needed and the word source
    /// fails to provide one.
    pub fn new(mut source: W, store: S, mut rng: StdRng) -> io::Result<Self> {
        let restored = store.load().and_then(|saved| {
            let queue: Vec<Word> = saved
                .words
                .iter()
                .filter_map(|w| Word::new(w.as_str()).ok())
                .collect();
            if queue.is_empty() {
                None
            } else {
                Some(GameState::restored(
                    queue,
                    saved.points,
                    saved.strikes,
                    &mut rng,
                ))
            }
        });

        let state = match restored {
            Some(state) => state,
            None => {
                let words = source.refill()?;
                let queue = shuffle_with(&words, &mut rng);
                GameState::new(queue, &mut rng)
            }
        };

        Ok(Self {
            state,
            source,
            store,
            rng,
        })
    }

    /// Current state snapshot for rendering
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one event and perform its effects
    ///
    /// Returns the feedback messages produced, in order. Persistence and
    /// word-source failures are reported as feedback rather than errors - the
    /// game stays interactive either way.
    pub fn apply(&mut self, event: GameEvent) -> Vec<Feedback> {
        let (next, effects) = reduce(&self.state, &event, &mut self.rng);
        self.state = next;

        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::Feedback(message) => feedback.push(message),

                Effect::Persist => {
                    let saved = self.snapshot();
                    if let Err(err) = self.store.save(&saved) {
                        feedback.push(Feedback::error(format!("Couldn't save progress: {err}")));
                    }
                }

                Effect::RequestWords { generation } => match self.source.refill() {
                    Ok(words) if !words.is_empty() => {
                        let queue = shuffle_with(&words, &mut self.rng);
                        feedback.extend(self.apply(GameEvent::WordsLoaded {
                            generation,
                            words: queue,
                        }));
                    }
                    Ok(_) => {
                        feedback.push(Feedback::error("The word source returned no words"));
                    }
                    Err(err) => {
                        feedback.push(Feedback::error(format!("Couldn't load words: {err}")));
                    }
                },
            }
        }

        feedback
    }

    /// The persisted slice of the current state
    fn snapshot(&self) -> SavedGame {
        SavedGame {
            words: self
                .state
                .queue
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            points: self.state.scores.points,
            strikes: self.state.scores.strikes,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
