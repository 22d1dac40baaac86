//! Core domain types for honeycomb solving
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letterset;
mod scoring;
mod word;

pub use letterset::LetterSet;
pub use scoring::ScoreRules;
pub use word::{Word, WordError};
