//! Honeycomb Solver
//!
//! Finds the best-scoring honeycomb — one required center letter plus six
//! other letters — for a spelling-bee style word puzzle. The search space
//! per center is every 6-element subset of the candidate pool; scoring is
//! done with one bulk subset-sum pass per center instead of a per-word
//! inner loop, and centers are searched in parallel.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use honeycomb_solver::core::ScoreRules;
//! use honeycomb_solver::solver::{Corpus, best_for_center, top_letters};
//! use honeycomb_solver::wordlists::load_from_file;
//!
//! // Build the corpus from a newline-delimited dictionary
//! let raw = load_from_file("words.txt").unwrap();
//! let corpus = Corpus::build(raw, b's', ScoreRules::default());
//!
//! // Restrict the alphabet to the 15 highest-scoring letters
//! let pool = top_letters(&corpus.letter_scores(), 15, b's');
//!
//! let best = best_for_center(&corpus, b'r', pool).unwrap();
//! println!("{}: {} points", best.honeycomb, best.score);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
