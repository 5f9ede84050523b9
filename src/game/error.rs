//! Game-level error taxonomy
//!
//! All three variants are recoverable: the session rejects the submission
//! and is left unchanged. The display layers decide how to surface them.

use std::fmt;

/// Error type for rejected guess submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess is not exactly 5 letters
    InvalidGuessLength(usize),
    /// Well-formed, but not an accepted word
    NotInDictionary(String),
    /// The day's session has already concluded
    SessionOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength(len) => {
                write!(f, "Guess must be exactly 5 letters, got {len}")
            }
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
            Self::SessionOver => write!(f, "Today's game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
