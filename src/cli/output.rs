//! Output formatting for CLI commands.

use crate::cli::args::{OutputFormat, RubricaArgs};
use crate::error::Result;
use crate::report::AnalysisOutcome;

/// Render an analysis outcome in the requested format.
pub fn output_outcome(outcome: &AnalysisOutcome, args: &RubricaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(outcome)?
            } else {
                serde_json::to_string(outcome)?
            };
            println!("{rendered}");
            Ok(())
        }
        OutputFormat::Human => {
            print_human(outcome);
            Ok(())
        }
    }
}

/// Human-readable per-section summary, in document order.
fn print_human(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Success(reports) => {
            println!("--- Analysis Results Summary ---");
            for (name, report) in reports {
                println!("\n--- {name} ---");
                println!("Total Tokens: {}", report.total_words);
                println!("Excluded (Articles/Verbs): {}", report.excluded_words);
                println!("Final Counted Words: {}", report.counted_words_total);

                let ranked: Vec<String> = report
                    .top_words
                    .iter()
                    .map(|entry| format!("{}: {}", entry.word, entry.count))
                    .collect();
                println!(
                    "Top {} Counted Words: [{}]",
                    report.top_words.len(),
                    ranked.join(", ")
                );
            }
        }
        AnalysisOutcome::Error(message) => {
            println!("Analysis Failed: {message}");
        }
    }
}
