//! Practice game against a random word
//!
//! Same rules as the daily game, but nothing is persisted and the outcome
//! never reaches the stored statistics.

use super::daily::get_user_input;
use crate::core::Word;
use crate::daily::local_date_string;
use crate::game::{AggregateStats, MAX_ATTEMPTS, Session};
use crate::output::formatters::tile_row;
use crate::output::print_conclusion;
use crate::wordlists::Dictionary;

/// Run a practice round against `target`
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_practice(dictionary: &Dictionary, target: Word) -> Result<(), String> {
    let mut session = Session::new(local_date_string(), target, None);

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║        H O R R O R D L E  practice           ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("A random word, {MAX_ATTEMPTS} guesses, nothing on the line.");
    println!("Type 'reveal' to give up, 'quit' to leave.\n");

    while !session.is_over() {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts().len() + 1);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n🦇 Fleeing already?\n");
                return Ok(());
            }
            "reveal" | "give up" => {
                println!("\nThe word was {}.\n", session.target());
                return Ok(());
            }
            _ => {}
        }

        match session.submit(&input, dictionary) {
            Ok(_) => {
                if let Some(attempt) = session.attempts().last() {
                    println!("  {}\n", tile_row(&attempt.guess, attempt.evaluation));
                }
            }
            Err(err) => println!("  ✗ {err}\n"),
        }
    }

    // Scratch stats keep practice rounds out of the stored record
    let mut scratch = AggregateStats::default();
    if let Some(outcome) = session.conclude(&mut scratch) {
        print_conclusion(&session, outcome);
    }

    Ok(())
}
