//! Qualifying-word listing command

use crate::core::LetterSet;
use crate::solver::{Corpus, Honeycomb, SolveError, qualifying_words};

/// One qualifying word with its contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub text: String,
    pub score: u32,
    pub pangram: bool,
}

/// The qualifying words for a honeycomb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListing {
    pub honeycomb: Honeycomb,
    /// Sorted by descending score, then alphabetically
    pub entries: Vec<WordEntry>,
    pub total_score: u32,
}

/// List every corpus word that qualifies for the given honeycomb
///
/// # Errors
///
/// Returns `SolveError` for an invalid honeycomb or one containing the
/// excluded letter.
pub fn run_words(
    corpus: &Corpus,
    center: u8,
    others: LetterSet,
) -> Result<WordListing, SolveError> {
    let honeycomb = Honeycomb::new(center, others)?;

    if honeycomb.allowed().contains(corpus.excluded()) {
        return Err(SolveError::ExcludedLetter {
            letter: corpus.excluded(),
        });
    }

    let mut entries: Vec<WordEntry> = qualifying_words(corpus, &honeycomb)
        .into_iter()
        .map(|word| WordEntry {
            text: word.text().to_string(),
            score: word.score(),
            pangram: corpus.rules().is_pangram(word.letters()),
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.text.cmp(&b.text)));
    let total_score = entries.iter().map(|entry| entry.score).sum();

    Ok(WordListing {
        honeycomb,
        entries,
        total_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreRules;
    use crate::solver::score_honeycomb;

    fn corpus() -> Corpus {
        Corpus::build(
            ["gamely", "mealy", "galley", "gleam", "quickly"],
            b's',
            ScoreRules::default(),
        )
    }

    #[test]
    fn lists_only_qualifying_words() {
        let listing = run_words(&corpus(), b'g', LetterSet::from_word("amelyx")).unwrap();

        let texts: Vec<&str> = listing.entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["galley", "gamely", "gleam"]);
    }

    #[test]
    fn sorted_by_score_then_alphabetically() {
        let listing = run_words(&corpus(), b'g', LetterSet::from_word("amelyx")).unwrap();

        // galley and gamely tie at 6 points; gleam trails with 5
        assert_eq!(listing.entries[0].score, 6);
        assert_eq!(listing.entries[0].text, "galley");
        assert_eq!(listing.entries[1].text, "gamely");
        assert_eq!(listing.entries[2].text, "gleam");
    }

    #[test]
    fn total_matches_reference_score() {
        let corpus = corpus();
        let listing = run_words(&corpus, b'g', LetterSet::from_word("amelyx")).unwrap();
        let comb = Honeycomb::new(b'g', LetterSet::from_word("amelyx")).unwrap();

        assert_eq!(listing.total_score, score_honeycomb(&corpus, &comb));
    }

    #[test]
    fn flags_pangrams() {
        let listing = run_words(&corpus(), b'q', LetterSet::from_word("uickly")).unwrap();
        assert_eq!(listing.entries.len(), 1);
        assert!(listing.entries[0].pangram);
    }

    #[test]
    fn rejects_center_among_others() {
        assert_eq!(
            run_words(&corpus(), b'g', LetterSet::from_word("gamely")).unwrap_err(),
            SolveError::CenterAmongOthers { center: b'g' }
        );
    }
}
