//! Simple interactive CLI mode
//!
//! Text-based typed-guess variant without TUI: the scrambled word is printed
//! and the player types the unscrambled answer.

use crate::game::{Game, GameEvent};
use crate::output::{print_feedback, print_game_over, print_round};
use crate::store::Store;
use crate::words::WordSource;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource, S: Store>(game: &mut Game<W, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Scramble - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the word and type your guess.");
    println!("Three strikes and the game is over; passes skip a word for free.\n");
    println!("Commands: 'pass' to skip, 'reset' for a new game, 'quit' to exit\n");

    loop {
        if game.state().is_over() {
            print_game_over(&game.state().scores);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    for feedback in game.apply(GameEvent::Reset) {
                        print_feedback(&feedback);
                    }
                }
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        print_round(game.state());

        let input = get_user_input("Guess (or 'pass', 'reset', 'quit')")?;

        let feedback = match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "pass" | "p" => game.apply(GameEvent::Pass),
            "reset" | "new" => game.apply(GameEvent::Reset),
            _ => game.apply(GameEvent::Guess(input)),
        };

        for message in feedback {
            print_feedback(&message);
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
