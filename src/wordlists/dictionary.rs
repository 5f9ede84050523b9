//! Accepted-word membership set
//!
//! The dictionary answers one question: is this 5-letter word an accepted
//! guess? Built once at startup, before any submission is taken.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of all accepted guess words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<[u8; 5]>,
}

impl Dictionary {
    /// Build a dictionary from a word list
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let words = words.iter().map(|w| *w.letters()).collect();
        Self { words }
    }

    /// Check whether a word is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word.letters())
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
