//! Command implementations

pub mod letters;
pub mod score;
pub mod solve;
pub mod words;

pub use letters::{LetterEntry, rank_letters};
pub use score::{ScoreReport, run_score};
pub use solve::{SolveConfig, SolveReport, run_solve};
pub use words::{WordEntry, WordListing, run_words};
