//! Word lists for the daily game
//!
//! Provides embedded word lists compiled into the binary and the
//! accepted-guess dictionary built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
