//! Best-honeycomb search command
//!
//! Builds the candidate pool, searches every candidate center, and returns
//! the global best plus the per-center comparison table.

use crate::core::LetterSet;
use crate::solver::{Corpus, ScoreResult, SolveError, best_for_center, top_letters};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Configuration for a solve run
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Heuristic pool size (ignored when `pool` is given)
    pub pool_size: usize,
    /// Explicit candidate pool, bypassing the heuristic
    pub pool: Option<LetterSet>,
    /// Candidate centers; defaults to every pool letter
    pub centers: Option<Vec<u8>>,
    /// Show a progress bar while centers are searched
    pub progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pool_size: 15,
            pool: None,
            centers: None,
            progress: false,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a solve run
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The globally best honeycomb
    pub best: ScoreResult,
    /// Per-center best results, sorted descending by score
    pub table: Vec<ScoreResult>,
    /// The candidate pool the search ran over
    pub pool: LetterSet,
    /// Size of the corpus the search ran against
    pub corpus_words: usize,
}

/// Run the full search: pool selection, per-center fan-out, reduction
///
/// The pool comes from the config, or from the top-`pool_size` letters by
/// aggregate point mass. Centers default to every pool letter. Per-center
/// searches are independent and run in parallel; the table is sorted
/// descending by score with ties keeping center input order, so the best
/// entry is deterministic.
///
/// # Errors
///
/// Returns `SolveError` if the pool is smaller than 7 letters, a center is
/// outside the pool, or no centers remain.
pub fn run_solve(corpus: &Corpus, config: &SolveConfig) -> Result<SolveReport, SolveError> {
    let pool = config.pool.unwrap_or_else(|| {
        top_letters(&corpus.letter_scores(), config.pool_size, corpus.excluded())
    });

    let centers: Vec<u8> = match &config.centers {
        Some(centers) => centers.clone(),
        None => pool.iter().collect(),
    };

    if centers.is_empty() {
        return Err(SolveError::EmptyCenters);
    }

    let pb = if config.progress {
        let pb = ProgressBar::new(centers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} centers")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Result<Vec<ScoreResult>, SolveError> = centers
        .par_iter()
        .map(|&center| {
            let result = best_for_center(corpus, center, pool);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();

    let mut table = results?;
    table.sort_by(|a, b| b.score.cmp(&a.score));
    let best = table[0];

    Ok(SolveReport {
        best,
        table,
        pool,
        corpus_words: corpus.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreRules;
    use crate::solver::score_honeycomb;

    fn corpus() -> Corpus {
        Corpus::build(
            ["gamely", "mealy", "galley", "gleam", "rating", "tearing", "eagerly"],
            b's',
            ScoreRules::default(),
        )
    }

    #[test]
    fn solve_with_explicit_pool() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aegilmnrty")),
            ..SolveConfig::new()
        };

        let report = run_solve(&corpus, &config).unwrap();
        assert_eq!(report.pool.len(), 10);
        assert_eq!(report.table.len(), 10);
        assert!(report.best.score > 0);
    }

    #[test]
    fn solve_with_heuristic_pool() {
        let corpus = corpus();
        let config = SolveConfig {
            pool_size: 8,
            ..SolveConfig::new()
        };

        let report = run_solve(&corpus, &config).unwrap();
        assert_eq!(report.pool.len(), 8);
        assert!(!report.pool.contains(b's'));
    }

    #[test]
    fn solve_table_sorted_and_best_is_first() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aegilmnrty")),
            ..SolveConfig::new()
        };

        let report = run_solve(&corpus, &config).unwrap();
        assert_eq!(report.best, report.table[0]);
        for pair in report.table.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn solve_best_agrees_with_reference_scoring() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aegilmnrty")),
            ..SolveConfig::new()
        };

        let report = run_solve(&corpus, &config).unwrap();
        assert_eq!(
            report.best.score,
            score_honeycomb(&corpus, &report.best.honeycomb)
        );
    }

    #[test]
    fn solve_with_explicit_centers() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aegilmnrty")),
            centers: Some(vec![b'g', b'r']),
            ..SolveConfig::new()
        };

        let report = run_solve(&corpus, &config).unwrap();
        assert_eq!(report.table.len(), 2);
    }

    #[test]
    fn solve_rejects_center_outside_pool() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aegilmny")),
            centers: Some(vec![b'z']),
            ..SolveConfig::new()
        };

        assert_eq!(
            run_solve(&corpus, &config).unwrap_err(),
            SolveError::CenterNotInPool { center: b'z' }
        );
    }

    #[test]
    fn solve_rejects_tiny_pool() {
        let corpus = corpus();
        let config = SolveConfig {
            pool: Some(LetterSet::from_word("aeg")),
            ..SolveConfig::new()
        };

        assert_eq!(
            run_solve(&corpus, &config).unwrap_err(),
            SolveError::PoolTooSmall { size: 3 }
        );
    }
}
