//! Daily game, plain CLI mode
//!
//! Text-based play of today's session without the TUI.

use crate::daily::DailyWord;
use crate::game::MAX_ATTEMPTS;
use crate::output::formatters::tile_row;
use crate::output::print_conclusion;
use crate::storage::{self, StateStore};
use crate::wordlists::Dictionary;
use std::io::{self, Write};

/// Run the plain-stdin daily game
///
/// Resumes any stored session for today, persists after every accepted
/// submission, and records the outcome once the game concludes.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// the session record.
pub fn run_daily(
    store: &mut dyn StateStore,
    dictionary: &Dictionary,
    daily: &DailyWord,
) -> Result<(), String> {
    let mut stats = storage::load_stats(store);
    let mut session = storage::start_or_resume(store, &daily.date, daily);

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            H O R R O R D L E                 ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Find the word of {} in {MAX_ATTEMPTS} guesses.",
        daily.date
    );
    println!("Type 'quit' to leave; your progress is saved.\n");

    if !session.attempts().is_empty() && !session.is_over() {
        println!("Resuming today's game:\n");
        for attempt in session.attempts() {
            println!("  {}", tile_row(&attempt.guess, attempt.evaluation));
        }
        println!();
    }

    while !session.is_over() {
        if session.hint_unlocked()
            && let Some(hint) = session.hint()
        {
            println!("  🕯 Hint: the word {hint}\n");
        }

        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts().len() + 1);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n🦇 Come back before midnight...\n");
                return Ok(());
            }
            _ => {}
        }

        match session.submit(&input, dictionary) {
            Ok(_) => {
                if let Some(attempt) = session.attempts().last() {
                    println!("  {}\n", tile_row(&attempt.guess, attempt.evaluation));
                }
                storage::persist_session(store, &session).map_err(|e| e.to_string())?;
            }
            Err(err) => println!("  ✗ {err}\n"),
        }
    }

    if let Some(outcome) = session.conclude(&mut stats) {
        storage::persist_stats(store, &stats).map_err(|e| e.to_string())?;
        storage::persist_session(store, &session).map_err(|e| e.to_string())?;
        print_conclusion(&session, outcome);
    }

    Ok(())
}

/// Get user input with a prompt
pub(super) fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
