//! Formatting utilities for terminal output

use crate::solver::Honeycomb;

/// Format a honeycomb as uppercase center + outer letters
#[must_use]
pub fn format_honeycomb(honeycomb: &Honeycomb) -> String {
    let center = (honeycomb.center() as char).to_ascii_uppercase();
    let others: String = honeycomb
        .others()
        .iter()
        .map(|letter| (letter as char).to_ascii_uppercase())
        .collect();

    format!("[{center}] {others}")
}

/// Create a progress bar string
#[must_use]
pub fn create_score_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
