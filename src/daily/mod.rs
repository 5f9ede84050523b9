//! Day keying and target-word selection
//!
//! The day's target is chosen deterministically from the embedded answer
//! pool: days elapsed since a fixed era start, modulo the pool length. Every
//! install agrees on the day's word without any network fetch. Day rollover
//! is a date-string comparison, never elapsed wall-clock time.

use crate::core::Word;
use chrono::{Local, NaiveDate};
use rand::prelude::IndexedRandom;

/// The day's secret word with its calendar key and hint
#[derive(Debug, Clone)]
pub struct DailyWord {
    pub date: String,
    pub target: Word,
    pub hint: Option<String>,
}

impl DailyWord {
    /// Select the target for a `YYYY-MM-DD` date string
    ///
    /// Returns `None` for an unparseable date or an empty answer pool.
    #[must_use]
    pub fn for_date(date: &str, answers: &[Word]) -> Option<Self> {
        if answers.is_empty() {
            return None;
        }

        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        let offset = day.signed_duration_since(era_start()).num_days();

        // rem_euclid keeps pre-era dates inside the pool
        let index = offset.rem_euclid(answers.len() as i64) as usize;
        let target = answers[index].clone();
        let hint = Some(letter_hint(&target));

        Some(Self {
            date: date.to_string(),
            target,
            hint,
        })
    }

    /// Select the target for the player's current local date
    #[must_use]
    pub fn today(answers: &[Word]) -> Option<Self> {
        Self::for_date(&local_date_string(), answers)
    }
}

/// The player's local calendar date, formatted `YYYY-MM-DD`
#[must_use]
pub fn local_date_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Pick a uniformly random practice word from the answer pool
#[must_use]
pub fn practice_word(answers: &[Word]) -> Option<Word> {
    answers.choose(&mut rand::rng()).cloned()
}

/// First day of the puzzle sequence
fn era_start() -> NaiveDate {
    // Constant components, cannot fail
    NaiveDate::from_ymd_opt(2022, 1, 7).expect("valid era date")
}

fn letter_hint(word: &Word) -> String {
    format!(
        "begins with '{}' and ends with '{}'",
        word.letter_at(0) as char,
        word.letter_at(4) as char
    )
}
