//! Honeycomb solving algorithms
//!
//! This module contains the corpus, the honeycomb types, and the search.

mod corpus;
mod honeycomb;
pub mod search;

pub use corpus::{Corpus, top_letters};
pub use honeycomb::{Honeycomb, ScoreResult};
pub use search::{best_for_center, best_overall, center_table, qualifying_words, score_honeycomb};

use std::fmt;

/// Error type for invalid search input
///
/// Every variant is a contract violation by the caller; the computation is
/// pure and total given valid input, so nothing here is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The candidate pool has fewer than the 7 letters a honeycomb needs
    PoolTooSmall { size: u32 },
    /// The requested center letter is not a member of the candidate pool
    CenterNotInPool { center: u8 },
    /// The excluded letter appeared in a pool or honeycomb
    ExcludedLetter { letter: u8 },
    /// A honeycomb was given other than exactly six outer letters
    OthersNotSix { count: u32 },
    /// A honeycomb's center letter also appeared among its outer letters
    CenterAmongOthers { center: u8 },
    /// No candidate centers were supplied
    EmptyCenters,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolTooSmall { size } => {
                write!(f, "Candidate pool has {size} letters, need at least 7")
            }
            Self::CenterNotInPool { center } => {
                write!(f, "Center letter '{}' is not in the candidate pool", *center as char)
            }
            Self::ExcludedLetter { letter } => {
                write!(f, "Letter '{}' is excluded from play", *letter as char)
            }
            Self::OthersNotSix { count } => {
                write!(f, "A honeycomb needs exactly 6 outer letters, got {count}")
            }
            Self::CenterAmongOthers { center } => {
                write!(
                    f,
                    "Center letter '{}' also appears among the outer letters",
                    *center as char
                )
            }
            Self::EmptyCenters => write!(f, "No candidate center letters supplied"),
        }
    }
}

impl std::error::Error for SolveError {}
