//! Explicit honeycomb scoring command
//!
//! Scores one caller-specified honeycomb against the corpus; this is the
//! path used to check published results against a frozen dictionary.

use crate::core::LetterSet;
use crate::solver::{Corpus, Honeycomb, ScoreResult, SolveError, qualifying_words};

/// Result of scoring an explicit honeycomb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub result: ScoreResult,
    /// Number of corpus words that qualify for the honeycomb
    pub qualifying: usize,
    /// How many of those are pangrams
    pub pangrams: usize,
}

/// Score an explicitly constructed honeycomb
///
/// # Errors
///
/// Returns `SolveError` if the outer letters do not number exactly six,
/// the center appears among them, or the honeycomb contains the excluded
/// letter (which upstream filtering should have made impossible to score).
pub fn run_score(
    corpus: &Corpus,
    center: u8,
    others: LetterSet,
) -> Result<ScoreReport, SolveError> {
    let honeycomb = Honeycomb::new(center, others)?;

    if honeycomb.allowed().contains(corpus.excluded()) {
        return Err(SolveError::ExcludedLetter {
            letter: corpus.excluded(),
        });
    }

    let words = qualifying_words(corpus, &honeycomb);
    let score = words.iter().map(|word| word.score()).sum();
    let pangrams = words
        .iter()
        .filter(|word| corpus.rules().is_pangram(word.letters()))
        .count();

    Ok(ScoreReport {
        result: ScoreResult { honeycomb, score },
        qualifying: words.len(),
        pangrams,
    })
}
