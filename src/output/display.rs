//! Display functions for game results

use super::formatters::{create_progress_bar, share_grid};
use crate::game::{AggregateStats, MAX_ATTEMPTS, Outcome, Session};
use colored::Colorize;

/// Print the end-of-game banner and share grid
///
/// The target word is revealed only on a loss.
pub fn print_conclusion(session: &Session, outcome: Outcome) {
    println!();
    if outcome.won {
        let verdict = match outcome.attempts_used {
            1 => "Unthinkable. First guess!",
            2 => "Chilling! Two guesses!",
            3 => "Wicked! Three guesses!",
            4 => "Well hunted!",
            5 => "A close call!",
            _ => "Escaped by a hair!",
        };

        println!(
            "{}",
            format!(
                "🎃 You survived in {}/{MAX_ATTEMPTS}!",
                outcome.attempts_used
            )
            .green()
            .bold()
        );
        println!("   {verdict}");
    } else {
        println!(
            "{}",
            format!("💀 Out of guesses! The word was {}", session.target())
                .red()
                .bold()
        );
    }

    println!("\n{}", share_grid(session));
}

/// Print the aggregate statistics report
pub fn print_stats(stats: &AggregateStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "HORRORDLE STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("\n   Played:           {}", stats.games_played);
    println!(
        "   Won:              {} ({:.0}%)",
        stats.games_won,
        stats.win_rate()
    );
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Max streak:       {}", stats.max_streak);

    println!("\n   {}", "Guess distribution:".bright_cyan());
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 20);
        println!("   {}: {} {}", i + 1, bar.green(), count);
    }
    println!();
}
