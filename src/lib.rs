//! # Rubrica
//!
//! Chapter-wise lexical profiling for paginated documents.
//!
//! Rubrica extracts the text of a PDF page by page, splits it into
//! sections on a delimiter word, tags each section's words with a
//! pretrained part-of-speech model, and reports per-section token
//! totals, determiner/verb exclusions, and the most frequent remaining
//! words.
//!
//! ## Features
//!
//! - Pure Rust pipeline over pluggable trait seams
//! - Pretrained tokenizer and tagger resources, cached locally and
//!   fetched on first use
//! - Deterministic top-K ranking with stable tie-breaking
//! - Human and JSON report rendering

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod section;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
