//! Core domain types for Horrordle
//!
//! This module contains the fundamental game types with no I/O dependencies.
//! All types here are pure and testable without a terminal or storage.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, LetterStatus};
pub use word::{Word, WordError};
