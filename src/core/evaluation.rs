//! Guess evaluation with exact duplicate-letter handling
//!
//! An evaluation encodes the per-position feedback for one guess using
//! base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The result is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use serde::{Deserialize, Serialize};

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Evaluation result for a full 5-letter guess
///
/// Represents the tile feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible evaluations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation(u8);

impl Evaluation {
    /// All correct (winning guess)
    pub const WIN: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new evaluation from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Evaluation value must be < 243");
        Self(value)
    }

    /// Get the raw encoded value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a winning evaluation (all correct)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.0 == 242
    }

    /// Evaluate `guess` against the secret `target`
    ///
    /// Implements the two-pass rules with exact duplicate-letter handling:
    ///
    /// 1. First pass: mark exact positional matches Correct and consume that
    ///    letter from a working pool of the target's letter counts
    /// 2. Second pass, left to right: mark Present and consume one occurrence
    ///    if the pool still holds the letter, otherwise Absent
    /// 3. Encode as base-3 number
    ///
    /// A letter is never consumed twice, so a guess can never show more
    /// Present tiles for a letter than remain unmatched in the target.
    ///
    /// # Examples
    /// ```
    /// use horrordle::core::{Evaluation, LetterStatus, Word};
    ///
    /// let guess = Word::new("elfel").unwrap();
    /// let target = Word::new("level").unwrap();
    /// let eval = Evaluation::of(&guess, &target);
    ///
    /// // E(present) L(present) F(absent) E(correct) L(correct)
    /// assert_eq!(eval.status_at(0), LetterStatus::Present);
    /// assert_eq!(eval.status_at(2), LetterStatus::Absent);
    /// assert_eq!(eval.status_at(4), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn of(guess: &Word, target: &Word) -> Self {
        let mut result = [0u8; 5];
        let mut pool = target.letter_counts();

        // First pass: exact positional matches consume their letter
        // Allow: index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.letters()[i] == target.letters()[i] {
                result[i] = LetterStatus::Correct.digit();

                let slot = (guess.letters()[i] - b'A') as usize;
                pool[slot] = pool[slot].saturating_sub(1);
            }
        }

        // Second pass, left to right: presence matches consume one occurrence
        // Allow: index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == 0 {
                let slot = (guess.letters()[i] - b'A') as usize;
                if pool[slot] > 0 {
                    result[i] = LetterStatus::Present.digit();
                    pool[slot] -= 1;
                }
            }
        }

        // Encode as base-3 number
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            value += digit * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }

        Self(value)
    }

    /// Get the status of a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn status_at(self, position: usize) -> LetterStatus {
        assert!(position < 5, "position must be < 5");
        let digit = (self.0 / 3u8.pow(position as u32)) % 3;
        LetterStatus::from_digit(digit)
    }

    /// Decode into one status per position, in guess order
    #[must_use]
    pub fn statuses(self) -> [LetterStatus; 5] {
        let mut out = [LetterStatus::Absent; 5];
        let mut val = self.0;

        for status in &mut out {
            *status = LetterStatus::from_digit(val % 3);
            val /= 3;
        }

        out
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..5 {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Convert to an emoji tile row like "🟨🟨⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses()
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬛',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_win_constant() {
        assert_eq!(Evaluation::WIN.value(), 242);
        assert!(Evaluation::WIN.is_win());
        assert_eq!(Evaluation::WIN.count_correct(), 5);
        assert_eq!(Evaluation::WIN.statuses(), [LetterStatus::Correct; 5]);
    }

    #[test]
    fn evaluation_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();
        let eval = Evaluation::of(&guess, &target);

        assert_eq!(eval.value(), 0);
        assert_eq!(eval.statuses(), [LetterStatus::Absent; 5]);
    }

    #[test]
    fn evaluation_self_match_is_win() {
        // evaluate(W, W) yields all Correct for every word
        for word in ["ghost", "crypt", "level", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Evaluation::of(&w, &w), Evaluation::WIN);
        }
    }

    #[test]
    fn evaluation_duplicate_letters_exact() {
        // Target LEVEL, guess ELFEL:
        // E(present) L(present) F(absent) E(correct) L(correct)
        // The pool holds one E and one L after the exact matches are
        // removed, so only one of each may show Present.
        let guess = Word::new("elfel").unwrap();
        let target = Word::new("level").unwrap();
        let eval = Evaluation::of(&guess, &target);

        assert_eq!(
            eval.statuses(),
            [
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Correct,
            ]
        );

        // 1 + 1×3 + 0×9 + 2×27 + 2×81 = 220
        assert_eq!(eval.value(), 220);
    }

    #[test]
    fn evaluation_duplicate_letters_no_double_count() {
        // SPEED vs ERASE: S(present) P(absent) E(present) E(present) D(absent)
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let eval = Evaluation::of(&guess, &target);

        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(eval.value(), 37);
    }

    #[test]
    fn evaluation_correct_takes_priority() {
        // ROBOT vs FLOOR: R(present) O(present) B(absent) O(correct) T(absent)
        // The positional O match wins its letter before pass 2 runs.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let eval = Evaluation::of(&guess, &target);

        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        assert_eq!(eval.value(), 58);
        assert_eq!(eval.count_correct(), 1);
    }

    #[test]
    fn evaluation_one_status_per_position() {
        let guess = Word::new("elfel").unwrap();
        let target = Word::new("level").unwrap();
        let eval = Evaluation::of(&guess, &target);

        let statuses = eval.statuses();
        for (i, status) in statuses.iter().enumerate() {
            assert_eq!(*status, eval.status_at(i));
        }
    }

    #[test]
    fn evaluation_status_at_decodes_digits() {
        // Manually built: digits [1, 2, 2, 0, 1]
        // 1 + 2×3 + 2×9 + 0×27 + 1×81 = 106
        let eval = Evaluation::new(106);

        assert_eq!(eval.status_at(0), LetterStatus::Present);
        assert_eq!(eval.status_at(1), LetterStatus::Correct);
        assert_eq!(eval.status_at(2), LetterStatus::Correct);
        assert_eq!(eval.status_at(3), LetterStatus::Absent);
        assert_eq!(eval.status_at(4), LetterStatus::Present);
        assert_eq!(eval.count_correct(), 2);
    }

    #[test]
    fn evaluation_to_emoji() {
        assert_eq!(Evaluation::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(Evaluation::new(0).to_emoji(), "⬛⬛⬛⬛⬛");

        let guess = Word::new("elfel").unwrap();
        let target = Word::new("level").unwrap();
        assert_eq!(Evaluation::of(&guess, &target).to_emoji(), "🟨🟨⬛🟩🟩");
    }

    #[test]
    fn evaluation_serde_round_trip() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let eval = Evaluation::of(&guess, &target);

        let json = serde_json::to_string(&eval).unwrap();
        let back: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(eval, back);
    }
}
