//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus, Word};
use crate::game::{MAX_ATTEMPTS, Session};
use colored::Colorize;

/// Render a guess as a row of colored letter tiles
#[must_use]
pub fn tile_row(guess: &Word, evaluation: Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.statuses())
        .map(|(letter, status)| {
            let cell = format!(" {letter} ");
            match status {
                LetterStatus::Correct => cell.black().on_green().to_string(),
                LetterStatus::Present => cell.black().on_yellow().to_string(),
                LetterStatus::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the spoiler-free share text for a session
///
/// Emoji rows only; the target word never appears.
#[must_use]
pub fn share_grid(session: &Session) -> String {
    let score = if session.is_won() {
        session.attempts().len().to_string()
    } else {
        "X".to_string()
    };

    let mut out = format!("Horrordle {} {score}/{MAX_ATTEMPTS}\n", session.date());
    for attempt in session.attempts() {
        out.push('\n');
        out.push_str(&attempt.evaluation.to_emoji());
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
