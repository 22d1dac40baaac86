//! Best-honeycomb search
//!
//! For a fixed center letter the search space is every 6-element subset of
//! the candidate pool's other letters. Scoring each subset by iterating the
//! corpus would be O(words × subsets); instead, word scores are bucketed by
//! their letter mask projected onto the pool, and a subset-sum (zeta)
//! transform turns the buckets into "total score of every word fitting
//! inside this mask" for all masks at once. The best 6-subset is then a
//! single scan. Distinct centers are independent and run in parallel.

use super::{Corpus, Honeycomb, ScoreResult, SolveError};
use crate::core::{LetterSet, Word};
use rayon::prelude::*;

/// Score one honeycomb by direct iteration over the corpus
///
/// A word qualifies when it contains the center letter and uses no letter
/// outside the allowed seven. This is the reference definition of a
/// honeycomb's score; [`best_for_center`] must agree with it on every
/// subset it enumerates.
///
/// # Examples
/// ```
/// use honeycomb_solver::core::{LetterSet, ScoreRules};
/// use honeycomb_solver::solver::{Corpus, Honeycomb, score_honeycomb};
///
/// let corpus = Corpus::build(["gamely"], b's', ScoreRules::default());
/// let comb = Honeycomb::new(b'g', LetterSet::from_word("amelyx")).unwrap();
/// assert_eq!(score_honeycomb(&corpus, &comb), 6);
/// ```
#[must_use]
pub fn score_honeycomb(corpus: &Corpus, honeycomb: &Honeycomb) -> u32 {
    let center = honeycomb.center();
    let allowed = honeycomb.allowed();

    corpus
        .words()
        .iter()
        .filter(|word| word.letters().contains(center) && word.letters().is_subset_of(allowed))
        .map(Word::score)
        .sum()
}

/// The qualifying words for a honeycomb, in corpus order
#[must_use]
pub fn qualifying_words<'a>(corpus: &'a Corpus, honeycomb: &Honeycomb) -> Vec<&'a Word> {
    let center = honeycomb.center();
    let allowed = honeycomb.allowed();

    corpus
        .words()
        .iter()
        .filter(|word| word.letters().contains(center) && word.letters().is_subset_of(allowed))
        .collect()
}

/// Find the best-scoring honeycomb with the given center letter
///
/// Every 6-element subset of `pool \ {center}` is scored in one bulk pass:
///
/// 1. Prune the corpus to words that contain the center and fit inside the
///    pool — nothing else can qualify for any subset.
/// 2. Project each pruned word's non-center letters onto the P = |pool| − 1
///    outer letters and accumulate its score into a dense table indexed by
///    the projected mask.
/// 3. Run a subset-sum (zeta) transform in O(P · 2^P), after which entry m
///    holds the total score of every word whose letters fit inside mask m.
/// 4. Scan the masks with exactly six bits set for the maximum.
///
/// The table holds 2^P u32 entries — 64 KiB at the validated pool size of
/// 15, but 64 MiB for a full 25-letter pool. Full-alphabet runs work and
/// are how the pool heuristic gets verified; the pool size is the caller's
/// control over both memory and time.
///
/// Among equal-scoring subsets the first mask in ascending numeric order
/// wins; pool letters are assigned bits alphabetically, so the result is
/// deterministic and reproducible.
///
/// # Errors
/// Returns `SolveError` if the pool has fewer than 7 letters, does not
/// contain the center, or contains the excluded letter.
pub fn best_for_center(
    corpus: &Corpus,
    center: u8,
    pool: LetterSet,
) -> Result<ScoreResult, SolveError> {
    validate_pool(corpus, center, pool)?;

    let outer: Vec<u8> = pool.without(center).iter().collect();
    let p = outer.len();

    // Bit position of each outer letter in the projected mask space
    let mut bit_of = [usize::MAX; 26];
    for (position, &letter) in outer.iter().enumerate() {
        bit_of[(letter - b'a') as usize] = position;
    }

    // Bucket scores by projected mask (steps 1 and 2). Iterates the
    // per-letter-set totals rather than individual words: anagrams and
    // duplicates land in the same bucket anyway.
    let mut table = vec![0u32; 1 << p];
    for &(letters, score) in corpus.set_scores() {
        if !letters.contains(center) || !letters.is_subset_of(pool) {
            continue;
        }

        let mut mask = 0usize;
        for letter in letters.without(center).iter() {
            mask |= 1 << bit_of[(letter - b'a') as usize];
        }
        table[mask] += score;
    }

    // Zeta transform (step 3): table[m] becomes the sum over all subsets of m
    for bit in 0..p {
        let high = 1usize << bit;
        for mask in 0..table.len() {
            if mask & high != 0 {
                let below = table[mask ^ high];
                table[mask] += below;
            }
        }
    }

    // Step 4: lowest 6-bit mask first, strictly-greater wins thereafter
    let mut best_mask = (1usize << 6) - 1;
    let mut best_score = table[best_mask];
    for (mask, &score) in table.iter().enumerate().skip(best_mask + 1) {
        if mask.count_ones() == 6 && score > best_score {
            best_mask = mask;
            best_score = score;
        }
    }

    let others: LetterSet = outer
        .iter()
        .enumerate()
        .filter(|&(position, _)| best_mask & (1 << position) != 0)
        .map(|(_, &letter)| letter)
        .collect();

    Ok(ScoreResult {
        honeycomb: Honeycomb::new(center, others)?,
        score: best_score,
    })
}

/// Find the globally best honeycomb over a list of candidate centers
///
/// Each center is searched independently on a parallel iterator; results
/// are reduced with a strictly-greater comparison in input order, so ties
/// go to the first-seen center regardless of scheduling.
///
/// # Errors
/// Returns `SolveError` if no centers are supplied or any per-center
/// search rejects its input.
pub fn best_overall(
    corpus: &Corpus,
    centers: &[u8],
    pool: LetterSet,
) -> Result<ScoreResult, SolveError> {
    let results = search_centers(corpus, centers, pool)?;

    let mut best = results[0];
    for result in &results[1..] {
        if result.score > best.score {
            best = *result;
        }
    }

    Ok(best)
}

/// The per-center diagnostic table, sorted descending by score
///
/// One entry per candidate center: that center's best honeycomb and score.
/// Ties keep input order (the sort is stable). This is the comparison view
/// used to judge whether the pool heuristic left points on the table.
///
/// # Errors
/// Returns `SolveError` if no centers are supplied or any per-center
/// search rejects its input.
pub fn center_table(
    corpus: &Corpus,
    centers: &[u8],
    pool: LetterSet,
) -> Result<Vec<ScoreResult>, SolveError> {
    let mut results = search_centers(corpus, centers, pool)?;
    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

/// Run `best_for_center` for every center in parallel, preserving order
fn search_centers(
    corpus: &Corpus,
    centers: &[u8],
    pool: LetterSet,
) -> Result<Vec<ScoreResult>, SolveError> {
    if centers.is_empty() {
        return Err(SolveError::EmptyCenters);
    }

    centers
        .par_iter()
        .map(|&center| best_for_center(corpus, center, pool))
        .collect()
}

fn validate_pool(corpus: &Corpus, center: u8, pool: LetterSet) -> Result<(), SolveError> {
    if pool.len() < 7 {
        return Err(SolveError::PoolTooSmall { size: pool.len() });
    }

    if !pool.contains(center) {
        return Err(SolveError::CenterNotInPool { center });
    }

    if pool.contains(corpus.excluded()) {
        return Err(SolveError::ExcludedLetter {
            letter: corpus.excluded(),
        });
    }

    Ok(())
}
