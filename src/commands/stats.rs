//! Statistics report command

use crate::output::print_stats;
use crate::storage::{self, StateStore};

/// Print the stored aggregate statistics
pub fn run_stats(store: &dyn StateStore) {
    let stats = storage::load_stats(store);
    print_stats(&stats);
}
