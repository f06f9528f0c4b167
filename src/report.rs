//! Section reports and the overall analysis outcome.
//!
//! Reports are derived from [`SectionStats`] and immutable once
//! computed. Ranking happens here, not in the counter: the frequency
//! map carries no ordering of its own beyond first-encounter order,
//! which the ranking uses to break count ties deterministically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::counter::SectionStats;

/// One ranked word with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Lexical report for a single section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Retained (alphabetic) tokens in the section.
    pub total_words: u64,
    /// Determiner- and verb-class tokens among them.
    pub excluded_words: u64,
    /// `total_words - excluded_words`.
    pub counted_words_total: u64,
    /// Up to `top_words` most frequent counted words, count descending,
    /// ties in first-encounter order.
    pub top_words: Vec<WordCount>,
}

impl SectionReport {
    /// Derive a report from raw section statistics.
    pub fn from_stats(stats: &SectionStats, top_k: usize) -> Self {
        SectionReport {
            total_words: stats.total_words,
            excluded_words: stats.excluded_words,
            counted_words_total: stats.counted_words(),
            top_words: top_words(&stats.frequencies, top_k),
        }
    }
}

/// The result of analyzing one document.
///
/// Serializes to `{"success": {...}}` with section names in document
/// order, or `{"error": "..."}` when document extraction failed.
/// Callers must check the discriminator before reading sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisOutcome {
    /// Section display name to report, insertion order = document order.
    Success(IndexMap<String, SectionReport>),
    /// Human-readable failure description with the underlying cause.
    Error(String),
}

impl AnalysisOutcome {
    /// Whether this outcome carries section reports.
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success(_))
    }
}

/// Rank a frequency map and keep the `k` most frequent entries.
///
/// The sort is stable on the map's insertion order, so equal counts
/// keep their first-encounter order.
pub fn top_words(frequencies: &IndexMap<String, u64>, k: usize) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = frequencies
        .iter()
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(k);
    ranked
}
