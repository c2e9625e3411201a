//! Display functions for the CLI game mode

use super::formatters::{score_line, spaced_letters};
use crate::game::{Feedback, FeedbackStyle, GameState, Scoreboard};
use colored::Colorize;

/// Print a feedback message styled by kind
pub fn print_feedback(feedback: &Feedback) {
    match feedback.style {
        FeedbackStyle::Info => println!("{}", feedback.text.bright_cyan()),
        FeedbackStyle::Success => println!("{}", feedback.text.bright_green().bold()),
        FeedbackStyle::Error => println!("{}", feedback.text.bright_red()),
    }
}

/// Print the current round: scrambled word plus the score line
pub fn print_round(state: &GameState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Unscramble: {}",
        spaced_letters(&state.scrambled).bright_yellow().bold()
    );
    println!("{}", score_line(&state.scores).bright_white());
    println!("{}", "─".repeat(60).cyan());
}

/// Print the game-over banner
pub fn print_game_over(scores: &Scoreboard) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  G A M E   O V E R  ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Final score: {} point{}",
        scores.points.to_string().bright_yellow().bold(),
        if scores.points == 1 { "" } else { "s" }
    );
    println!();
}
