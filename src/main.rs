//! Scramble - CLI
//!
//! Word-scramble game with a drag-and-drop TUI mode and a typed-guess CLI
//! mode. Progress (words, points, strikes) persists between sessions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble::{
    commands::run_simple,
    game::Game,
    store::{JsonFileStore, MemoryStore, StoreKind},
    words::SourceKind,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Word-scramble game: drag the letters back into place",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Save file for game progress
    #[arg(long, global = true, default_value = "scramble_save.json")]
    save: PathBuf,

    /// Play without persisting progress
    #[arg(long, global = true)]
    no_save: bool,

    /// Seed the RNG for reproducible scrambles
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode with mouse drag-and-drop (default)
    Play,

    /// Simple CLI mode (type your guesses, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = SourceKind::from_flag(&cli.wordlist);

    let store = if cli.no_save {
        StoreKind::Memory(MemoryStore::default())
    } else {
        StoreKind::Json(JsonFileStore::new(&cli.save))
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let game = Game::new(source, store, rng)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple_command(game),
    }
}

fn run_play_command(game: Game<SourceKind, StoreKind>) -> Result<()> {
    use scramble::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}

fn run_simple_command(mut game: Game<SourceKind, StoreKind>) -> Result<()> {
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}
