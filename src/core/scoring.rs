//! Word scoring rules
//!
//! The standard rules: a word of minimum qualifying length scores 1 point,
//! longer words score their length, and a word using exactly seven distinct
//! letters (a pangram) earns a 15-point bonus on top.

use super::LetterSet;

/// Configurable scoring parameters
///
/// All search code takes rules as an explicit value; there is no global
/// scoring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRules {
    /// Minimum qualifying word length
    pub min_length: usize,
    /// Points for a word of exactly `min_length` letters
    pub short_word_points: u32,
    /// Distinct-letter count that makes a word a pangram
    pub pangram_size: u32,
    /// Bonus points for a pangram
    pub pangram_bonus: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            min_length: 4,
            short_word_points: 1,
            pangram_size: 7,
            pangram_bonus: 15,
        }
    }
}

impl ScoreRules {
    /// Score a word of the given length and distinct-letter set
    ///
    /// Words at (or below) the minimum length score `short_word_points`;
    /// longer words score their length. The pangram bonus applies iff the
    /// word uses exactly `pangram_size` distinct letters. Length filtering
    /// itself is corpus eligibility, not scoring.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::{LetterSet, ScoreRules};
    ///
    /// let rules = ScoreRules::default();
    /// assert_eq!(rules.score(4, LetterSet::from_word("gaml")), 1);
    /// assert_eq!(rules.score(6, LetterSet::from_word("gamely")), 6);
    ///
    /// // 7 distinct letters: length + bonus
    /// assert_eq!(rules.score(7, LetterSet::from_word("quickly")), 22);
    /// ```
    #[must_use]
    pub fn score(&self, length: usize, letters: LetterSet) -> u32 {
        let base = if length <= self.min_length {
            self.short_word_points
        } else {
            length as u32
        };

        if letters.len() == self.pangram_size {
            base + self.pangram_bonus
        } else {
            base
        }
    }

    /// Check whether a letter set qualifies as a pangram under these rules
    #[must_use]
    pub const fn is_pangram(&self, letters: LetterSet) -> bool {
        letters.len() == self.pangram_size
    }
}
