//! Command line argument parsing for the Rubrica CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{DEFAULT_DELIMITER, DEFAULT_MODEL_REPO, DEFAULT_TOP_WORDS};

/// Rubrica - chapter-wise lexical profiling for paginated documents
#[derive(Parser, Debug, Clone)]
#[command(name = "rubrica")]
#[command(about = "Chapter-wise lexical profiling for paginated documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Rubrica Contributors")]
#[command(long_about = None)]
pub struct RubricaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RubricaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a document chapter by chapter
    Analyze(AnalyzeArgs),
}

/// Arguments for analyzing a document
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the document file (PDF)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Literal, case-sensitive word that separates sections
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Number of ranked words to keep per section
    #[arg(long, default_value_t = DEFAULT_TOP_WORDS)]
    pub top_words: usize,

    /// Remote model repository holding the linguistic resources
    #[arg(long, default_value = DEFAULT_MODEL_REPO)]
    pub model_repo: String,

    /// Cache directory override for the linguistic resources
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console report
    Human,
    /// JSON serialization of the analysis outcome
    Json,
}
