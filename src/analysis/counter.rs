//! Word filtering and frequency counting.
//!
//! This is the center of the pipeline: tokenize a text block, keep the
//! purely alphabetic tokens, lowercase them, tag the whole sequence,
//! and tally how often each non-excluded word occurs. Determiner- and
//! verb-class tokens count toward the totals but never enter the
//! frequency map.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use rubrica::analysis::counter::WordCounter;
//! use rubrica::analysis::tagger::PerceptronTagger;
//! use rubrica::analysis::tokenizer::WordTokenizer;
//!
//! # fn tagger() -> PerceptronTagger { unimplemented!() }
//! # fn example() -> rubrica::error::Result<()> {
//! let counter = WordCounter::new(Arc::new(WordTokenizer::new()), Arc::new(tagger()));
//! let stats = counter.analyze("The cat sat.")?;
//! assert_eq!(stats.total_words, 3);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::category::WordClass;
use crate::analysis::tagger::Tagger;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, RubricaError};

/// Lexical statistics for one block of text.
///
/// Immutable once computed. `frequencies` preserves first-encounter
/// order so downstream ranking can break count ties deterministically;
/// the map itself implies no ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStats {
    /// Number of retained (alphabetic) tokens.
    pub total_words: u64,
    /// Number of exclusion events (not distinct excluded words).
    pub excluded_words: u64,
    /// Occurrences per lowercased word, excluded classes omitted.
    pub frequencies: IndexMap<String, u64>,
}

impl SectionStats {
    /// Stats for an empty text block.
    pub fn empty() -> Self {
        SectionStats {
            total_words: 0,
            excluded_words: 0,
            frequencies: IndexMap::new(),
        }
    }

    /// Number of tokens that survived exclusion.
    pub fn counted_words(&self) -> u64 {
        self.total_words - self.excluded_words
    }
}

/// Tokenize-tag-count pipeline over injected collaborators.
///
/// The tokenizer and tagger are shared by reference; the counter holds
/// no mutable state, so one instance can serve any number of
/// `analyze` calls with identical results.
#[derive(Clone)]
pub struct WordCounter {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn Tagger>,
}

impl WordCounter {
    /// Create a counter over the given tokenizer and tagger.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, tagger: Arc<dyn Tagger>) -> Self {
        WordCounter { tokenizer, tagger }
    }

    /// Compute lexical statistics for a block of text.
    ///
    /// Empty input yields zeroed stats, not an error. Tokens with any
    /// non-alphabetic character are dropped before tagging and do not
    /// count toward `total_words`.
    pub fn analyze(&self, text: &str) -> Result<SectionStats> {
        if text.is_empty() {
            return Ok(SectionStats::empty());
        }

        let words: Vec<String> = self
            .tokenizer
            .tokenize(text)?
            .filter(|token| token.is_alphabetic())
            .map(|token| token.text.to_lowercase())
            .collect();

        // One batch call: tagging is context-sensitive and must see
        // the whole sequence.
        let tags = self.tagger.tag(&words)?;
        if tags.len() != words.len() {
            return Err(RubricaError::analysis(format!(
                "tagger returned {} tags for {} words",
                tags.len(),
                words.len()
            )));
        }

        let mut stats = SectionStats::empty();
        stats.total_words = words.len() as u64;

        for (word, code) in words.into_iter().zip(tags.iter()) {
            if WordClass::from_code(code).is_excluded() {
                stats.excluded_words += 1;
            } else {
                *stats.frequencies.entry(word).or_insert(0) += 1;
            }
        }

        Ok(stats)
    }
}
