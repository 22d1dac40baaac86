//! Honeycomb representation
//!
//! A honeycomb is one required center letter plus six other distinct
//! letters. Words must use the center and draw every letter from the seven.

use super::SolveError;
use crate::core::LetterSet;
use std::fmt;

/// A puzzle honeycomb: a center letter and six outer letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Honeycomb {
    center: u8,
    others: LetterSet,
}

impl Honeycomb {
    /// Create a honeycomb from a center letter and its outer letters
    ///
    /// # Errors
    /// Returns `SolveError` if `others` does not hold exactly six letters,
    /// or if the center appears among them.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::LetterSet;
    /// use honeycomb_solver::solver::Honeycomb;
    ///
    /// let comb = Honeycomb::new(b'g', LetterSet::from_word("amelyx")).unwrap();
    /// assert_eq!(comb.allowed().len(), 7);
    ///
    /// assert!(Honeycomb::new(b'g', LetterSet::from_word("amely")).is_err());
    /// assert!(Honeycomb::new(b'g', LetterSet::from_word("gamely")).is_err());
    /// ```
    pub fn new(center: u8, others: LetterSet) -> Result<Self, SolveError> {
        if others.len() != 6 {
            return Err(SolveError::OthersNotSix {
                count: others.len(),
            });
        }

        if others.contains(center) {
            return Err(SolveError::CenterAmongOthers { center });
        }

        Ok(Self { center, others })
    }

    /// The required center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    /// The six outer letters
    #[inline]
    #[must_use]
    pub const fn others(&self) -> LetterSet {
        self.others
    }

    /// The full allowed alphabet: center plus outer letters (7 total)
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.others.with(self.center)
    }
}

impl fmt::Display for Honeycomb {
    /// Renders as center + sorted outer letters, e.g. `"r + aegint"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.center as char, self.others)
    }
}

/// The outcome of scoring honeycombs for a center: the best honeycomb
/// found and its total score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub honeycomb: Honeycomb,
    pub score: u32,
}
