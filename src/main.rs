//! Horrordle - CLI
//!
//! Daily word game with TUI and plain CLI modes. One word per calendar day,
//! six guesses, progress saved across restarts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use horrordle::{
    commands::{run_daily, run_practice, run_share, run_stats},
    core::Word,
    daily::{DailyWord, practice_word},
    interactive::{App, run_tui},
    storage::{self, FileStore},
    wordlists::{ALLOWED, ANSWERS, Dictionary, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "horrordle",
    about = "Daily 5-letter horror word game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Extra accepted-guess list: path to a word file merged into the dictionary
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (same daily game without TUI)
    Simple,

    /// Practice round against a random word (no stats recorded)
    Practice,

    /// Show aggregate statistics
    Stats,

    /// Reprint today's share grid
    Share,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let answers = words_from_slice(ANSWERS);
    let dictionary = build_dictionary(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &answers),
        Commands::Simple => run_simple_command(&dictionary, &answers),
        Commands::Practice => {
            let target = practice_word(&answers).context("answer pool is empty")?;
            run_practice(&dictionary, target).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let store = FileStore::open_default()?;
            run_stats(&store);
            Ok(())
        }
        Commands::Share => {
            let store = FileStore::open_default()?;
            let daily_word = todays_word(&answers)?;
            run_share(&store, &daily_word);
            Ok(())
        }
    }
}

/// Build the accepted-guess dictionary, merging an optional custom list
fn build_dictionary(extra: Option<&str>) -> Result<Dictionary> {
    use horrordle::wordlists::loader::load_from_file;

    let mut words = words_from_slice(ALLOWED);

    if let Some(path) = extra {
        let custom =
            load_from_file(path).with_context(|| format!("failed to read word list {path}"))?;
        words.extend(custom);
    }

    Ok(Dictionary::from_words(&words))
}

fn todays_word(answers: &[Word]) -> Result<DailyWord> {
    DailyWord::today(answers).context("answer pool is empty")
}

fn run_play_command(dictionary: &Dictionary, answers: &[Word]) -> Result<()> {
    let mut store = FileStore::open_default()?;
    let daily_word = todays_word(answers)?;
    let session = storage::start_or_resume(&store, &daily_word.date, &daily_word);

    let app = App::new(session, dictionary, &mut store);
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, answers: &[Word]) -> Result<()> {
    let mut store = FileStore::open_default()?;
    let daily_word = todays_word(answers)?;
    run_daily(&mut store, dictionary, &daily_word).map_err(|e| anyhow::anyhow!(e))
}
