//! Display functions for command results

use super::formatters::{create_score_bar, format_honeycomb};
use crate::commands::{LetterEntry, ScoreReport, SolveReport, WordListing};
use colored::Colorize;

/// Print the result of a full solve run
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST HONEYCOMB".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Corpus:   {} eligible words", report.corpus_words);
    println!(
        "   Pool:     {} ({} letters)",
        report.pool.to_string().to_uppercase(),
        report.pool.len()
    );

    println!(
        "\n   {}  {}",
        format_honeycomb(&report.best.honeycomb)
            .bright_yellow()
            .bold(),
        format!("{} points", report.best.score).green().bold()
    );

    println!("\n{}", "─".repeat(60).cyan());
    println!(" Per-center results");
    println!("{}", "─".repeat(60).cyan());

    let max_score = report.table.first().map_or(0, |entry| entry.score);
    for entry in &report.table {
        let bar = create_score_bar(f64::from(entry.score), f64::from(max_score), 24);
        println!(
            "   {}  {} {:>6}",
            format_honeycomb(&entry.honeycomb),
            bar.green(),
            entry.score
        );
    }
}

/// Print the result of scoring an explicit honeycomb
pub fn print_score_report(report: &ScoreReport) {
    println!(
        "\n{}  {}",
        format_honeycomb(&report.result.honeycomb)
            .bright_yellow()
            .bold(),
        format!("{} points", report.result.score).green().bold()
    );
    println!(
        "   {} qualifying words, {} pangrams",
        report.qualifying, report.pangrams
    );
}

/// Print the letter point-mass ranking
pub fn print_letter_ranking(entries: &[LetterEntry]) {
    println!("\n{}", "─".repeat(48).cyan());
    println!(" Letter point mass (pool heuristic ordering)");
    println!("{}", "─".repeat(48).cyan());

    let max_score = entries.first().map_or(0, |entry| entry.total_score);
    for entry in entries {
        let bar = create_score_bar(f64::from(entry.total_score), f64::from(max_score), 20);
        println!(
            "   {}  {} {:>8}  ({} words)",
            (entry.letter as char).to_ascii_uppercase(),
            bar.green(),
            entry.total_score,
            entry.word_count
        );
    }
}

/// Print the qualifying words for a honeycomb
pub fn print_word_listing(listing: &WordListing) {
    println!(
        "\n{}  {}",
        format_honeycomb(&listing.honeycomb).bright_yellow().bold(),
        format!("{} points", listing.total_score).green().bold()
    );
    println!("   {} qualifying words\n", listing.entries.len());

    for entry in &listing.entries {
        if entry.pangram {
            println!(
                "   {:>4}  {} {}",
                entry.score,
                entry.text,
                "pangram".bright_magenta().bold()
            );
        } else {
            println!("   {:>4}  {}", entry.score, entry.text);
        }
    }
}
