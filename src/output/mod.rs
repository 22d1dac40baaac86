//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_letter_ranking, print_score_report, print_solve_report, print_word_listing,
};
