//! Share-grid reprint command

use crate::daily::DailyWord;
use crate::output::formatters::share_grid;
use crate::storage::{self, StateStore};

/// Print today's share grid if today's session has concluded
pub fn run_share(store: &dyn StateStore, daily: &DailyWord) {
    let session = storage::start_or_resume(store, &daily.date, daily);

    if session.is_over() {
        println!("\n{}\n", share_grid(&session));
    } else if session.attempts().is_empty() {
        println!("\nYou haven't played today's game yet.\n");
    } else {
        println!("\nFinish today's game first, then come back to share.\n");
    }
}
