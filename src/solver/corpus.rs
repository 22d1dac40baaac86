//! Eligible word corpus
//!
//! The corpus is built once from a raw word list and is read-only for the
//! lifetime of a solve. Eligibility: at least the minimum length, no
//! excluded letter, and no more distinct letters than fit in a honeycomb.

use crate::core::{LetterSet, ScoreRules, Word};
use rustc_hash::FxHashMap;

/// The full collection of eligible, scored words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    set_scores: Vec<(LetterSet, u32)>,
    rules: ScoreRules,
    excluded: u8,
}

impl Corpus {
    /// Build a corpus from raw word text
    ///
    /// Filters to eligible words (length ≥ `rules.min_length`, no
    /// `excluded` letter, at most `rules.pangram_size` distinct letters,
    /// alphabetic ASCII only) and scores each survivor. Deterministic given
    /// identical input; duplicate entries in the input are kept, so two
    /// words with identical letter sets both contribute their points.
    ///
    /// # Examples
    /// ```
    /// use honeycomb_solver::core::ScoreRules;
    /// use honeycomb_solver::solver::Corpus;
    ///
    /// let raw = ["gamely", "gam", "sassy", "rating"];
    /// let corpus = Corpus::build(raw, b's', ScoreRules::default());
    ///
    /// // "gam" is too short, "sassy" contains the excluded letter
    /// assert_eq!(corpus.len(), 2);
    /// ```
    #[must_use]
    pub fn build<I, S>(raw_words: I, excluded: u8, rules: ScoreRules) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Word> = raw_words
            .into_iter()
            .filter_map(|raw| Word::new(raw.as_ref(), &rules).ok())
            .filter(|word| {
                word.len() >= rules.min_length
                    && !word.letters().contains(excluded)
                    && word.letters().len() <= rules.pangram_size
            })
            .collect();

        // The membership matrix: total score per distinct letter set. Words
        // sharing a letter set (anagrams, duplicates) qualify together for
        // any honeycomb, so the scorer only needs their summed points.
        let mut grouped: FxHashMap<LetterSet, u32> = FxHashMap::default();
        for word in &words {
            *grouped.entry(word.letters()).or_insert(0) += word.score();
        }
        let mut set_scores: Vec<(LetterSet, u32)> = grouped.into_iter().collect();
        set_scores.sort_unstable_by_key(|&(set, _)| set.bits());

        Self {
            words,
            set_scores,
            rules,
            excluded,
        }
    }

    /// The eligible words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of eligible words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the corpus is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total score per distinct letter set, sorted by raw bits
    ///
    /// Derived once at build time; this is what the bulk scorer iterates,
    /// since words with identical letter sets qualify for exactly the same
    /// honeycombs.
    #[inline]
    #[must_use]
    pub fn set_scores(&self) -> &[(LetterSet, u32)] {
        &self.set_scores
    }

    /// The scoring rules the corpus was built with
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &ScoreRules {
        &self.rules
    }

    /// The letter excluded from play
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> u8 {
        self.excluded
    }

    /// Aggregate point mass per letter
    ///
    /// For each letter, the total score of every corpus word containing it.
    /// This is the heuristic behind candidate-pool selection: a letter that
    /// accumulates little individual point mass is very unlikely to appear
    /// in the globally best honeycomb. A pure derived value, computed per
    /// corpus and passed explicitly to [`top_letters`].
    #[must_use]
    pub fn letter_scores(&self) -> [u32; 26] {
        let mut scores = [0u32; 26];
        for word in &self.words {
            for letter in word.letters().iter() {
                scores[(letter - b'a') as usize] += word.score();
            }
        }
        scores
    }

    /// Number of corpus words containing each letter
    #[must_use]
    pub fn letter_word_counts(&self) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for word in &self.words {
            for letter in word.letters().iter() {
                counts[(letter - b'a') as usize] += 1;
            }
        }
        counts
    }
}

/// Select the `k` letters with the greatest aggregate point mass
///
/// This trades completeness for tractability: the subset search space
/// shrinks from C(25, 6) per center to C(k-1, 6). Ties are broken
/// alphabetically; the excluded letter is never selected. Passing k ≥ 25
/// returns the whole alphabet minus the excluded letter, which makes a
/// full-alphabet verification run possible (at a documented memory cost,
/// see [`best_for_center`](crate::solver::best_for_center)).
///
/// # Examples
/// ```
/// use honeycomb_solver::core::ScoreRules;
/// use honeycomb_solver::solver::{Corpus, top_letters};
///
/// let corpus = Corpus::build(["gamely", "galey", "mealy"], b's', ScoreRules::default());
/// let pool = top_letters(&corpus.letter_scores(), 4, b's');
/// assert_eq!(pool.len(), 4);
/// ```
#[must_use]
pub fn top_letters(letter_scores: &[u32; 26], k: usize, excluded: u8) -> LetterSet {
    let mut order: Vec<usize> = (0..26)
        .filter(|&i| b'a' + i as u8 != excluded)
        .collect();

    // Descending score; index order (alphabetical) breaks ties
    order.sort_by_key(|&i| (std::cmp::Reverse(letter_scores[i]), i));

    order
        .into_iter()
        .take(k)
        .map(|i| b'a' + i as u8)
        .collect()
}
