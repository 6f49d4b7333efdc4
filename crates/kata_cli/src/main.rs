//! Kata CLI - Command Line Front-End for the Exercise Catalogue
//!
//! This is the operational entry point for the kata_core library. Every
//! exercise has a subcommand taking literal arguments; array and matrix
//! arguments are JSON literals.
//!
//! # Commands
//!
//! - `kata list` - List the catalogue
//! - `kata nearest-bigger 321321` - Next larger permutation of digits
//! - `kata rotate '[[1,2,3],[4,5,6],[7,8,9]]'` - Rotate a matrix clockwise
//! - `kata check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer of the workspace, this crate only parses input,
//! calls into kata_core and renders the result.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{KataConfig, OutputFormat};

const DEFAULT_CONFIG_PATH: &str = "kata.toml";

/// Kata control-flow exercise catalogue CLI
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (forces debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format, overriding configuration
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Is the number >= 0 (zero counts as positive)
    #[command(allow_negative_numbers = true)]
    IsPositive {
        /// Number to check
        number: f64,
    },

    /// Largest of three numbers (ties prefer c, then b)
    #[command(allow_negative_numbers = true)]
    MaxNumber {
        /// First number
        a: f64,
        /// Second number
        b: f64,
        /// Third number
        c: f64,
    },

    /// Can a queen attack the king's square
    #[command(allow_negative_numbers = true)]
    QueenCapturesKing {
        /// Queen position as x,y or {"x":..,"y":..}
        queen: String,
        /// King position as x,y or {"x":..,"y":..}
        king: String,
    },

    /// Do three sides form an isosceles triangle
    #[command(allow_negative_numbers = true)]
    Isosceles {
        /// First side
        a: f64,
        /// Second side
        b: f64,
        /// Third side
        c: f64,
    },

    /// Roman numerals for 1..=39
    Roman {
        /// Number to convert
        number: u32,
    },

    /// Spell a numeric string word by word
    NumberToWords {
        /// Numeric string, e.g. -10.5
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// Does the string read the same both ways
    Palindrome {
        /// Text to check
        text: String,
    },

    /// First index of a character, -1 if absent
    IndexOf {
        /// Text to search
        text: String,
        /// Character to find
        letter: char,
    },

    /// Does the number contain the digit
    #[command(allow_negative_numbers = true)]
    ContainsDigit {
        /// Number to scan
        number: i64,
        /// Digit to look for
        digit: u8,
    },

    /// Index where left and right sums agree, -1 if none
    BalanceIndex {
        /// JSON array of integers, e.g. [1,2,5,3,0]
        array: String,
    },

    /// Square matrix filled in a clockwise spiral
    Spiral {
        /// Matrix size
        size: usize,
    },

    /// Rotate a square matrix 90 degrees clockwise
    Rotate {
        /// JSON matrix of integers, e.g. [[1,2],[3,4]]
        matrix: String,

        /// Number of quarter turns
        #[arg(short, long, default_value = "1")]
        times: u8,
    },

    /// Insertion sort ascending
    Sort {
        /// JSON array of integers
        array: String,
    },

    /// Move odd-indexed characters to the end, repeatedly
    Shuffle {
        /// Text to shuffle
        text: String,

        /// Number of shuffle steps
        #[arg(default_value = "1")]
        iterations: u64,

        /// Print the cycle period instead of shuffling
        #[arg(short, long)]
        period: bool,
    },

    /// Next larger number with the same digits
    NearestBigger {
        /// Positive integer
        number: u64,
    },

    /// List the exercise catalogue
    List,

    /// Validate and print the effective configuration
    Check,
}

/// Resolve configuration: defaults, file, environment, then flags.
fn resolve_config(cli: &Cli) -> std::result::Result<KataConfig, CliError> {
    let (path, required) = match cli.config.as_deref() {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_PATH, false),
    };

    let mut config = KataConfig::load_or_default(Path::new(path), required)?.with_env_override();
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Dispatch a parsed command to its implementation.
fn execute(command: &Commands, config: &KataConfig) -> Result<Value> {
    use commands::*;

    match command {
        Commands::IsPositive { number } => Ok(numeric::run_is_positive(*number)),
        Commands::MaxNumber { a, b, c } => Ok(numeric::run_max_number(*a, *b, *c)),
        Commands::QueenCapturesKing { queen, king } => {
            geometry::run_queen_captures_king(queen, king)
        }
        Commands::Isosceles { a, b, c } => Ok(geometry::run_isosceles(*a, *b, *c)),
        Commands::Roman { number } => text::run_roman(*number),
        Commands::NumberToWords { number } => Ok(text::run_number_to_words(number)),
        Commands::Palindrome { text: input } => Ok(text::run_palindrome(input)),
        Commands::IndexOf { text: input, letter } => Ok(text::run_index_of(input, *letter)),
        Commands::ContainsDigit { number, digit } => {
            Ok(numeric::run_contains_digit(*number, *digit))
        }
        Commands::BalanceIndex { array: input } => array::run_balance_index(input),
        Commands::Spiral { size } => matrix::run_spiral(*size),
        Commands::Rotate {
            matrix: input,
            times,
        } => matrix::run_rotate(input, *times),
        Commands::Sort { array: input } => array::run_sort(input),
        Commands::Shuffle {
            text: input,
            iterations,
            period,
        } => Ok(sequence::run_shuffle(input, *iterations, *period)),
        Commands::NearestBigger { number } => sequence::run_nearest_bigger(*number),
        Commands::List => Ok(list::run(config.format)),
        Commands::Check => check::run(config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli).context("failed to load configuration")?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let value = execute(&cli.command, &config)
        .with_context(|| format!("{:?} failed", cli.command))?;
    println!("{}", output::render(&value, config.format)?);

    info!("Done");
    Ok(())
}
