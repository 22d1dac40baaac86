//! Word list loading utilities
//!
//! The corpus input is a newline-delimited list of lowercase words, one per
//! line. Loading yields the raw text; eligibility filtering and scoring
//! happen in [`Corpus::build`](crate::solver::Corpus::build).

use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a newline-delimited file
///
/// Lines are trimmed; blank lines are skipped. No eligibility filtering is
/// applied here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use honeycomb_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split newline-delimited text into raw words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_splits_lines() {
        let words = words_from_text("gamely\nmealy\nrating\n");
        assert_eq!(words, vec!["gamely", "mealy", "rating"]);
    }

    #[test]
    fn words_from_text_trims_and_skips_blanks() {
        let words = words_from_text("  gamely  \n\n\t\nmealy\n");
        assert_eq!(words, vec!["gamely", "mealy"]);
    }

    #[test]
    fn words_from_text_empty_input() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("/nonexistent/word/list.txt");
        assert!(result.is_err());
    }
}
