//! Daily session state machine
//!
//! A `Session` is the player's game for one calendar day: the secret target,
//! the attempts made so far, and whether the game has concluded. Submissions
//! either append an attempt or reject with a `GameError`, leaving the session
//! unchanged. A concluded session is terminal for its day.

use super::error::GameError;
use super::stats::AggregateStats;
use crate::core::{Evaluation, Word, WordError};
use crate::wordlists::Dictionary;

/// Maximum attempts per session
pub const MAX_ATTEMPTS: usize = 6;

/// Valid attempts submitted before the day's hint unlocks
pub const HINT_GATE: usize = 5;

/// One evaluated guess within a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Result of concluding a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    /// 1-based index of the final attempt
    pub attempts_used: usize,
}

/// The player's game for a single calendar day
#[derive(Debug, Clone)]
pub struct Session {
    date: String,
    target: Word,
    hint: Option<String>,
    attempts: Vec<Attempt>,
    over: bool,
    won: bool,
    concluded: bool,
}

impl Session {
    /// Start a fresh session for `date` with the day's secret target
    #[must_use]
    pub fn new(date: impl Into<String>, target: Word, hint: Option<String>) -> Self {
        Self {
            date: date.into(),
            target,
            hint,
            attempts: Vec::new(),
            over: false,
            won: false,
            concluded: false,
        }
    }

    /// Rebuild a session from previously accepted guesses
    ///
    /// Evaluations are recomputed rather than trusted from storage, so a
    /// stored record can never disagree with the evaluator. Dictionary
    /// membership is not re-checked; the guesses were accepted when first
    /// submitted. Guesses beyond the attempt limit are dropped.
    #[must_use]
    pub fn restore(
        date: impl Into<String>,
        target: Word,
        hint: Option<String>,
        guesses: &[Word],
        concluded: bool,
    ) -> Self {
        let mut session = Self::new(date, target, hint);

        for guess in guesses.iter().take(MAX_ATTEMPTS) {
            if session.over {
                break;
            }
            session.push_attempt(guess.clone());
        }

        // The conclusion guard only means something once the game is over
        session.concluded = concluded && session.over;
        session
    }

    /// Submit a guess
    ///
    /// On success the attempt is appended and its evaluation returned; the
    /// session flips to game-over on a winning guess or the final attempt.
    ///
    /// # Errors
    /// - `GameError::InvalidGuessLength` if the normalized guess is not
    ///   exactly 5 letters
    /// - `GameError::SessionOver` if the session has already concluded
    /// - `GameError::NotInDictionary` if the word is not an accepted guess
    ///
    /// The session is unchanged in every error case.
    pub fn submit(
        &mut self,
        guess: &str,
        dictionary: &Dictionary,
    ) -> Result<Evaluation, GameError> {
        let word = Word::new(guess).map_err(|e| match e {
            WordError::InvalidLength(len) => GameError::InvalidGuessLength(len),
            // Malformed characters can never name an accepted word
            WordError::NonAscii | WordError::InvalidCharacters => {
                GameError::NotInDictionary(guess.trim().to_uppercase())
            }
        })?;

        if self.over {
            return Err(GameError::SessionOver);
        }

        if !dictionary.contains(&word) {
            return Err(GameError::NotInDictionary(word.text().to_string()));
        }

        Ok(self.push_attempt(word))
    }

    fn push_attempt(&mut self, guess: Word) -> Evaluation {
        let evaluation = Evaluation::of(&guess, &self.target);
        self.attempts.push(Attempt { guess, evaluation });

        if evaluation.is_win() {
            self.over = true;
            self.won = true;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.over = true;
        }

        evaluation
    }

    /// Conclude the session, recording the outcome into `stats` exactly once
    ///
    /// Returns `None` while the session is still in progress. A second call
    /// on a concluded session reports the same outcome without touching
    /// `stats` again.
    pub fn conclude(&mut self, stats: &mut AggregateStats) -> Option<Outcome> {
        if !self.over {
            return None;
        }

        let outcome = Outcome {
            won: self.won,
            attempts_used: self.attempts.len(),
        };

        if !self.concluded {
            self.concluded = true;
            if outcome.won {
                stats.record_win(outcome.attempts_used);
            } else {
                stats.record_loss();
            }
        }

        Some(outcome)
    }

    /// Calendar date string (`YYYY-MM-DD`) this session belongs to
    #[inline]
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The secret target word
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The day's hint text, if the word has one
    #[inline]
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Attempts submitted so far, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Whether the session has ended (won or out of attempts)
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the target was found
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Whether the outcome has been recorded into aggregate stats
    #[inline]
    #[must_use]
    pub const fn is_concluded(&self) -> bool {
        self.concluded
    }

    /// Attempts still available
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Whether the hint may be shown
    ///
    /// Unlocks after `HINT_GATE` valid attempts without a win.
    #[must_use]
    pub fn hint_unlocked(&self) -> bool {
        self.hint.is_some() && !self.won && self.attempts.len() >= HINT_GATE
    }
}
