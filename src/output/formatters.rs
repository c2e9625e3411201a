//! Formatting utilities for terminal output

use crate::core::Arrangement;
use crate::game::Scoreboard;

/// Format a scrambled word as spaced uppercase letters
#[must_use]
pub fn spaced_letters(scrambled: &str) -> String {
    let mut result = String::with_capacity(scrambled.len() * 2);
    for (i, ch) in scrambled.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch.to_ascii_uppercase());
    }
    result
}

/// Format the scramble tray as letter tokens
///
/// Slots whose letter is already placed in the drop zone render as empty
/// tokens.
#[must_use]
pub fn tray_tokens(scrambled: &str, arrangement: &Arrangement) -> String {
    let mut result = String::with_capacity(scrambled.len() * 4);
    for (slot, ch) in scrambled.chars().enumerate() {
        if slot > 0 {
            result.push(' ');
        }
        if arrangement.is_placed(slot) {
            result.push_str("[ ]");
        } else {
            result.push('[');
            result.push(ch.to_ascii_uppercase());
            result.push(']');
        }
    }
    result
}

/// Format the assembled letters in the drop zone
#[must_use]
pub fn zone_tokens(arrangement: &Arrangement) -> String {
    let mut result = String::with_capacity(arrangement.len() * 4);
    for (i, placed) in arrangement.placed().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push('[');
        result.push(placed.letter.to_ascii_uppercase());
        result.push(']');
    }
    result
}

/// One-line score summary
#[must_use]
pub fn score_line(scores: &Scoreboard) -> String {
    format!(
        "Points: {} | Strikes: {} | Passes: {}",
        scores.points, scores.strikes, scores.passes
    )
}
