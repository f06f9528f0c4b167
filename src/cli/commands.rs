//! Command implementations for the Rubrica CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{AnalysisConfig, ResourceConfig};
use crate::error::{Result, RubricaError};
use crate::pipeline::DocumentAnalyzer;
use crate::report::AnalysisOutcome;

/// Execute a CLI command.
pub fn execute_command(args: RubricaArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_document(analyze_args.clone(), &args),
    }
}

/// Analyze a document and render the per-section reports.
fn analyze_document(args: AnalyzeArgs, cli_args: &RubricaArgs) -> Result<()> {
    let config = AnalysisConfig {
        delimiter: args.delimiter,
        top_words: args.top_words,
    };
    let resources = ResourceConfig {
        repo_id: args.model_repo,
        cache_dir: args.cache_dir,
    };

    let analyzer = DocumentAnalyzer::with_config(config, resources)?;

    if cli_args.verbosity() > 0 && cli_args.output_format == OutputFormat::Human {
        println!("Starting analysis of: {}\n", args.document.display());
    }

    let outcome = analyzer.analyze_document(&args.document)?;
    output_outcome(&outcome, cli_args)?;

    // The error outcome already carries the cause; surface it through
    // the exit code as well.
    match outcome {
        AnalysisOutcome::Success(_) => Ok(()),
        AnalysisOutcome::Error(message) => Err(RubricaError::document(message)),
    }
}
