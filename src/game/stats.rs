//! Cross-day aggregate statistics
//!
//! Counters that accumulate across calendar days. One session contributes
//! to these exactly once, at conclusion.

use serde::{Deserialize, Serialize};

/// Running totals across all concluded sessions
///
/// Every field carries `#[serde(default)]` so records written by older
/// versions still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
    /// Wins by attempt count: `distribution[n - 1]` holds wins in n guesses
    #[serde(default)]
    pub distribution: [u32; 6],
}

impl AggregateStats {
    /// Record a won session
    pub fn record_win(&mut self, attempts_used: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        if (1..=6).contains(&attempts_used) {
            self.distribution[attempts_used - 1] += 1;
        }
    }

    /// Record a lost session
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Fraction of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
