//! Game state machine and statistics
//!
//! The session lifecycle for a single calendar day plus the cross-day
//! aggregate counters it feeds at conclusion.

mod error;
mod session;
mod stats;

pub use error::GameError;
pub use session::{Attempt, HINT_GATE, MAX_ATTEMPTS, Outcome, Session};
pub use stats::AggregateStats;
