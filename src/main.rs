//! Honeycomb Solver - CLI
//!
//! Finds the best-scoring honeycomb (center letter + six others) for a
//! spelling-bee style puzzle over a caller-supplied word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use honeycomb_solver::{
    commands::{SolveConfig, rank_letters, run_score, run_solve, run_words},
    core::{LetterSet, ScoreRules},
    output::{print_letter_ranking, print_score_report, print_solve_report, print_word_listing},
    solver::Corpus,
    wordlists::load_from_file,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "honeycomb_solver",
    about = "Best-honeycomb search for spelling-bee style word puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a newline-delimited word list
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Letter excluded from play
    #[arg(short, long, global = true, default_value_t = 's')]
    exclude: char,

    /// Candidate pool size for the letter heuristic
    #[arg(short = 'k', long, global = true, default_value_t = 15)]
    pool_size: usize,

    /// Explicit candidate pool letters (overrides --pool-size)
    #[arg(short, long, global = true)]
    pool: Option<String>,

    /// Minimum qualifying word length
    #[arg(long, global = true, default_value_t = 4)]
    min_length: usize,

    /// Bonus points for a pangram
    #[arg(long, global = true, default_value_t = 15)]
    pangram_bonus: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best honeycomb over all candidate centers (default)
    Solve {
        /// Candidate center letters (default: every pool letter)
        #[arg(short, long)]
        centers: Option<String>,
    },

    /// Score a specific honeycomb
    Score {
        /// The required center letter
        center: char,

        /// The six other letters, e.g. "aegint"
        others: String,
    },

    /// Show the letter point-mass ranking behind the pool heuristic
    Letters,

    /// List the qualifying words for a specific honeycomb
    Words {
        /// The required center letter
        center: char,

        /// The six other letters, e.g. "aegint"
        others: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = ScoreRules {
        min_length: cli.min_length,
        pangram_bonus: cli.pangram_bonus,
        ..ScoreRules::default()
    };
    let excluded = parse_letter(cli.exclude)?;
    let corpus = load_corpus(cli.wordlist.as_deref(), excluded, rules)?;

    let command = cli.command.unwrap_or(Commands::Solve { centers: None });

    match command {
        Commands::Solve { centers } => {
            let config = SolveConfig {
                pool_size: cli.pool_size,
                pool: cli.pool.as_deref().map(parse_letters).transpose()?,
                centers: centers.as_deref().map(parse_center_list).transpose()?,
                progress: true,
            };

            let report = run_solve(&corpus, &config)?;
            print_solve_report(&report);
        }
        Commands::Score { center, others } => {
            let report = run_score(&corpus, parse_letter(center)?, parse_letters(&others)?)?;
            print_score_report(&report);
        }
        Commands::Letters => {
            print_letter_ranking(&rank_letters(&corpus));
        }
        Commands::Words { center, others } => {
            let listing = run_words(&corpus, parse_letter(center)?, parse_letters(&others)?)?;
            print_word_listing(&listing);
        }
    }

    Ok(())
}

/// Load and filter the corpus from the word list path
fn load_corpus(path: Option<&std::path::Path>, excluded: u8, rules: ScoreRules) -> Result<Corpus> {
    let path = path.context("no word list given (use --wordlist <PATH>)")?;
    let raw = load_from_file(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(Corpus::build(raw, excluded, rules))
}

/// Parse a single letter argument, normalizing case
fn parse_letter(ch: char) -> Result<u8> {
    let lower = ch.to_ascii_lowercase();
    anyhow::ensure!(lower.is_ascii_lowercase(), "'{ch}' is not a letter");
    Ok(lower as u8)
}

/// Parse a string of letters into a set
fn parse_letters(text: &str) -> Result<LetterSet> {
    let mut set = LetterSet::EMPTY;
    for ch in text.chars() {
        set.insert(parse_letter(ch)?);
    }
    Ok(set)
}

/// Parse center letters preserving input order, skipping repeats
///
/// Input order matters: score ties between centers go to the first listed.
fn parse_center_list(text: &str) -> Result<Vec<u8>> {
    let mut centers = Vec::new();
    for ch in text.chars() {
        let letter = parse_letter(ch)?;
        if !centers.contains(&letter) {
            centers.push(letter);
        }
    }
    Ok(centers)
}
