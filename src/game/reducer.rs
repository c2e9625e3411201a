//! Pure game reducer
//!
//! Maps `(state, event)` to a new state plus effects. All gameplay rules live
//! here; randomness comes in through the injected RNG so tests can seed it.
//! Everything with side effects (persistence, word refills, display) happens
//! in the controller, driven by the returned [`Effect`]s.

use super::state::{Effect, Feedback, GameEvent, GameState, INITIAL_PASSES};
use crate::core::{ArrangeError, ArrangePhase};
use rand::Rng;

/// Apply one event to the game state
///
/// Returns the next state and the effects the caller must perform. Events
/// other than `Reset` are ignored once the game is over.
pub fn reduce<R: Rng + ?Sized>(
    state: &GameState,
    event: &GameEvent,
    rng: &mut R,
) -> (GameState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        GameEvent::PickUp { slot } => {
            if !next.is_over()
                && let Some(letter) = next.scrambled.chars().nth(*slot)
            {
                next.arrangement.pick_up(letter, *slot);
            }
        }

        GameEvent::Drop { x, zone_width } => {
            if !next.is_over() {
                match next.arrangement.drop_at(*x, *zone_width) {
                    Ok(_) | Err(ArrangeError::NoPayload) => {}
                    Err(err @ ArrangeError::InvalidDropZone) => {
                        effects.push(Effect::Feedback(Feedback::error(err.to_string())));
                    }
                }
            }
        }

        GameEvent::Submit => {
            if !next.is_over() {
                if next.arrangement.phase() == ArrangePhase::Empty {
                    effects.push(Effect::Feedback(Feedback::info("Place some letters first")));
                } else {
                    let candidate = next.arrangement.assembled();
                    score_guess(&mut next, &candidate, rng, &mut effects);
                }
            }
        }

        GameEvent::Guess(text) => {
            if !next.is_over() {
                let candidate = text.trim().to_lowercase();
                if candidate.is_empty() {
                    effects.push(Effect::Feedback(Feedback::info("Type a word first")));
                } else {
                    score_guess(&mut next, &candidate, rng, &mut effects);
                }
            }
        }

        GameEvent::Pass => {
            if !next.is_over() {
                if next.scores.passes == 0 {
                    effects.push(Effect::Feedback(Feedback::error("No passes remaining")));
                } else {
                    next.scores.passes -= 1;
                    let skipped = next.queue.remove(0);
                    next.rescramble(rng);
                    effects.push(Effect::Persist);
                    effects.push(Effect::Feedback(Feedback::info(format!(
                        "Skipped \"{skipped}\" - {} passes left",
                        next.scores.passes
                    ))));
                }
            }
        }

        GameEvent::Reset => {
            next.scores = super::state::Scoreboard::default();
            next.arrangement.clear();
            next.generation += 1;
            effects.push(Effect::RequestWords {
                generation: next.generation,
            });
            effects.push(Effect::Feedback(Feedback::info(format!(
                "New game - {INITIAL_PASSES} passes"
            ))));
        }

        GameEvent::WordsLoaded { generation, words } => {
            // A stale delivery (an older request overtaken by a newer one)
            // is dropped so the last requested queue wins.
            if *generation == next.generation {
                next.queue = words.clone();
                next.rescramble(rng);
                effects.push(Effect::Persist);
            }
        }
    }

    (next, effects)
}

/// Shared scoring transition for arranged and typed submissions
fn score_guess<R: Rng + ?Sized>(
    next: &mut GameState,
    candidate: &str,
    rng: &mut R,
    effects: &mut Vec<Effect>,
) {
    let Some(target) = next.queue.first() else {
        return;
    };

    if target.matches(candidate) {
        next.scores.points += 1;
        next.queue.remove(0);
        next.rescramble(rng);
        effects.push(Effect::Persist);
        effects.push(Effect::Feedback(Feedback::success(format!(
            "Correct! {} point{}",
            next.scores.points,
            if next.scores.points == 1 { "" } else { "s" }
        ))));
    } else {
        next.scores.strikes += 1;
        next.arrangement.clear();
        effects.push(Effect::Persist);
        effects.push(Effect::Feedback(Feedback::error(format!(
            "\"{candidate}\" is not it - strike {}",
            next.scores.strikes
        ))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::state::{FeedbackStyle, STRIKE_LIMIT};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn fresh(list: &[&str]) -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::new(words(list), &mut rng);
        (state, rng)
    }

    /// Drive pick-up/drop events that assemble `text` in the drop zone,
    /// appending left to right
    fn arrange(state: GameState, rng: &mut StdRng, text: &str) -> GameState {
        let mut current = state;
        for ch in text.chars() {
            let slot = current
                .scrambled
                .chars()
                .enumerate()
                .position(|(i, c)| c == ch && !current.arrangement.is_placed(i))
                .expect("letter available in scramble");
            current = reduce(&current, &GameEvent::PickUp { slot }, rng).0;
            current = reduce(
                &current,
                &GameEvent::Drop {
                    x: 99,
                    zone_width: 100,
                },
                rng,
            )
            .0;
        }
        current
    }

    fn has_persist(effects: &[Effect]) -> bool {
        effects.iter().any(|e| *e == Effect::Persist)
    }

    fn feedback_style(effects: &[Effect]) -> Option<FeedbackStyle> {
        effects.iter().find_map(|e| match e {
            Effect::Feedback(f) => Some(f.style),
            _ => None,
        })
    }

    #[test]
    fn correct_arranged_submission_scores_a_point() {
        let (state, mut rng) = fresh(&["react", "hooks"]);
        let state = arrange(state, &mut rng, "react");

        let (next, effects) = reduce(&state, &GameEvent::Submit, &mut rng);

        assert_eq!(next.scores.points, 1);
        assert_eq!(next.scores.strikes, 0);
        assert_eq!(next.active_word().unwrap().text(), "hooks");
        assert!(next.arrangement.is_empty());
        assert!(has_persist(&effects));
        assert_eq!(feedback_style(&effects), Some(FeedbackStyle::Success));
    }

    #[test]
    fn wrong_arranged_submission_is_a_strike() {
        // Target "hooks", player assembles "shook"
        let (state, mut rng) = fresh(&["hooks", "react"]);
        let state = arrange(state, &mut rng, "shook");

        let (next, effects) = reduce(&state, &GameEvent::Submit, &mut rng);

        assert_eq!(next.scores.strikes, 1);
        assert_eq!(next.scores.points, 0);
        // The word advances only on a correct match
        assert_eq!(next.active_word().unwrap().text(), "hooks");
        assert!(next.arrangement.is_empty());
        assert!(has_persist(&effects));
        assert_eq!(feedback_style(&effects), Some(FeedbackStyle::Error));
    }

    #[test]
    fn arrangement_is_empty_after_any_submit() {
        let (state, mut rng) = fresh(&["react", "hooks"]);

        let right = arrange(state.clone(), &mut rng, "react");
        let (after_right, _) = reduce(&right, &GameEvent::Submit, &mut rng);
        assert!(after_right.arrangement.is_empty());

        let wrong = arrange(state, &mut rng, "trace");
        let (after_wrong, _) = reduce(&wrong, &GameEvent::Submit, &mut rng);
        assert!(after_wrong.arrangement.is_empty());
    }

    #[test]
    fn submit_with_empty_arrangement_changes_nothing() {
        let (state, mut rng) = fresh(&["react"]);

        let (next, effects) = reduce(&state, &GameEvent::Submit, &mut rng);

        assert_eq!(next.scores, state.scores);
        assert_eq!(next.queue, state.queue);
        assert!(!has_persist(&effects));
        assert_eq!(feedback_style(&effects), Some(FeedbackStyle::Info));
    }

    #[test]
    fn typed_guess_scores_like_arranged_submit() {
        let (state, mut rng) = fresh(&["react", "hooks"]);

        let (next, _) = reduce(&state, &GameEvent::Guess("REACT".into()), &mut rng);
        assert_eq!(next.scores.points, 1);
        assert_eq!(next.active_word().unwrap().text(), "hooks");

        let (next, _) = reduce(&next, &GameEvent::Guess("shook".into()), &mut rng);
        assert_eq!(next.scores.strikes, 1);
        assert_eq!(next.active_word().unwrap().text(), "hooks");
    }

    #[test]
    fn three_strikes_ends_the_game_with_words_remaining() {
        let (mut state, mut rng) = fresh(&["react", "hooks", "state"]);

        for _ in 0..STRIKE_LIMIT {
            state = reduce(&state, &GameEvent::Guess("wrong".into()), &mut rng).0;
        }

        assert!(state.is_over());
        assert_eq!(state.queue.len(), 3);

        // Terminal state ignores further play
        let (after, effects) = reduce(&state, &GameEvent::Guess("react".into()), &mut rng);
        assert_eq!(after.scores.points, 0);
        assert!(effects.is_empty());
    }

    #[test]
    fn exhausting_the_queue_ends_the_game() {
        let (state, mut rng) = fresh(&["react"]);

        let (next, _) = reduce(&state, &GameEvent::Guess("react".into()), &mut rng);

        assert!(next.queue.is_empty());
        assert!(next.is_over());
    }

    #[test]
    fn pass_advances_without_scoring() {
        let (state, mut rng) = fresh(&["react", "hooks"]);

        let (next, effects) = reduce(&state, &GameEvent::Pass, &mut rng);

        assert_eq!(next.scores.passes, 2);
        assert_eq!(next.scores.points, 0);
        assert_eq!(next.scores.strikes, 0);
        assert_eq!(next.active_word().unwrap().text(), "hooks");
        assert!(has_persist(&effects));
    }

    #[test]
    fn pass_with_none_left_is_a_no_op() {
        let (mut state, mut rng) = fresh(&["react", "hooks"]);
        state.scores.passes = 0;

        let (next, effects) = reduce(&state, &GameEvent::Pass, &mut rng);

        assert_eq!(next.queue, state.queue);
        assert_eq!(next.scores, state.scores);
        assert!(!has_persist(&effects));
    }

    #[test]
    fn reset_restores_initial_counters_and_requests_words() {
        let (state, mut rng) = fresh(&["react", "hooks"]);
        let mut state = arrange(state, &mut rng, "re");
        state.scores.points = 5;
        state.scores.strikes = 2;
        state.scores.passes = 0;

        let (next, effects) = reduce(&state, &GameEvent::Reset, &mut rng);

        assert_eq!(next.scores.points, 0);
        assert_eq!(next.scores.strikes, 0);
        assert_eq!(next.scores.passes, INITIAL_PASSES);
        assert!(next.arrangement.is_empty());
        assert_eq!(next.generation, state.generation + 1);
        assert!(effects.contains(&Effect::RequestWords {
            generation: next.generation
        }));
    }

    #[test]
    fn reset_works_from_the_terminal_state() {
        let (mut state, mut rng) = fresh(&["react"]);
        state.scores.strikes = STRIKE_LIMIT;
        assert!(state.is_over());

        let (next, effects) = reduce(&state, &GameEvent::Reset, &mut rng);

        assert_eq!(next.scores.strikes, 0);
        assert!(effects.iter().any(|e| matches!(e, Effect::RequestWords { .. })));
    }

    #[test]
    fn words_loaded_replaces_queue_and_rescrambles() {
        let (state, mut rng) = fresh(&["react"]);

        let (next, effects) = reduce(
            &state,
            &GameEvent::WordsLoaded {
                generation: state.generation,
                words: words(&["hooks", "state"]),
            },
            &mut rng,
        );

        assert_eq!(next.active_word().unwrap().text(), "hooks");
        assert_eq!(next.scrambled.len(), 5);
        assert!(has_persist(&effects));
    }

    #[test]
    fn stale_words_delivery_is_discarded() {
        let (state, mut rng) = fresh(&["react"]);
        let state = reduce(&state, &GameEvent::Reset, &mut rng).0;

        // A delivery stamped with the pre-reset generation arrives late
        let (next, effects) = reduce(
            &state,
            &GameEvent::WordsLoaded {
                generation: state.generation - 1,
                words: words(&["hooks"]),
            },
            &mut rng,
        );

        assert_eq!(next.active_word().unwrap().text(), "react");
        assert!(effects.is_empty());
    }

    #[test]
    fn invalid_drop_reports_and_keeps_arrangement() {
        let (state, mut rng) = fresh(&["react"]);
        let state = arrange(state, &mut rng, "re");

        let picked = reduce(&state, &GameEvent::PickUp { slot: 4 }, &mut rng).0;
        let (next, effects) = reduce(
            &picked,
            &GameEvent::Drop {
                x: 0,
                zone_width: 0,
            },
            &mut rng,
        );

        assert_eq!(next.arrangement.assembled(), "re");
        assert_eq!(feedback_style(&effects), Some(FeedbackStyle::Error));
    }

    #[test]
    fn pick_up_out_of_range_slot_is_ignored() {
        let (state, mut rng) = fresh(&["react"]);

        let (next, effects) = reduce(&state, &GameEvent::PickUp { slot: 17 }, &mut rng);

        assert!(next.arrangement.pending().is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn queue_head_always_matches_scramble() {
        let (mut state, mut rng) = fresh(&["react", "hooks", "state"]);

        for guess in ["react", "hooks"] {
            let mut sorted: Vec<u8> = state.scrambled.bytes().collect();
            sorted.sort_unstable();
            let mut expected: Vec<u8> = state.active_word().unwrap().chars().to_vec();
            expected.sort_unstable();
            assert_eq!(sorted, expected);

            state = reduce(&state, &GameEvent::Guess(guess.into()), &mut rng).0;
        }
    }
}
