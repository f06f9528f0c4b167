//! Word tokenizer backed by pretrained rule tables.
//!
//! This module provides the production tokenizer. It splits text using
//! Unicode word boundary rules (UAX #29) and then refines the segments
//! with the rule tables shipped in the fetched tokenizer resource:
//! protected abbreviations stay whole, and contraction patterns split
//! clitics the way treebank-style tokenization does (`don't` becomes
//! `do` + `n't`).
//!
//! # Examples
//!
//! ```
//! use rubrica::analysis::tokenizer::Tokenizer;
//! use rubrica::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("I don't know.").unwrap().collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["I", "do", "n't", "know"]);
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, RubricaError};

/// Rule tables deserialized from the tokenizer resource file.
///
/// `abbreviations` are lowercased surface forms that must never be
/// split further. `contractions` are regex patterns with capture
/// groups; a word matching a pattern is replaced by its non-empty
/// capture groups, in order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenizerRules {
    #[serde(default)]
    pub abbreviations: Vec<String>,
    #[serde(default)]
    pub contractions: Vec<String>,
}

/// Fallback rules used when no resource file is supplied.
///
/// The fetched resource carries the full tables; this subset keeps the
/// tokenizer usable in tests and offline tooling.
fn default_rules() -> TokenizerRules {
    TokenizerRules {
        abbreviations: ["e.g", "i.e", "etc", "u.s.a", "u.k"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        contractions: vec![
            r"(?i)^(can)(not)$".to_string(),
            r"(?i)^(.+)(n['’]t)$".to_string(),
            r"(?i)^(.+)(['’](?:ll|re|ve|s|m|d))$".to_string(),
        ],
    }
}

/// A tokenizer that splits text on Unicode word boundaries and applies
/// pretrained refinement rules.
///
/// Non-word segments (whitespace, punctuation runs) are filtered out;
/// a segment survives only if it contains at least one alphanumeric
/// character. Byte offsets always refer to the original text, also for
/// the pieces of a split contraction.
#[derive(Debug)]
pub struct WordTokenizer {
    abbreviations: HashSet<String>,
    contractions: Vec<Regex>,
}

impl WordTokenizer {
    /// Create a tokenizer with the built-in fallback rules.
    pub fn new() -> Self {
        Self::from_rules(default_rules()).expect("built-in tokenizer rules must compile")
    }

    /// Create a tokenizer from explicit rule tables.
    ///
    /// Returns an error if any contraction pattern fails to compile.
    pub fn from_rules(rules: TokenizerRules) -> Result<Self> {
        let contractions = rules
            .contractions
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    RubricaError::analysis(format!("invalid contraction pattern '{pattern}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WordTokenizer {
            abbreviations: rules
                .abbreviations
                .into_iter()
                .map(|a| a.to_lowercase())
                .collect(),
            contractions,
        })
    }

    /// Load rule tables from a JSON resource file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let rules: TokenizerRules = serde_json::from_reader(BufReader::new(file))?;
        Self::from_rules(rules)
    }

    /// Split a word segment into tokens, applying the rule tables.
    ///
    /// `start` is the byte offset of the segment in the original text;
    /// `position` is the next free stream position and is advanced for
    /// every emitted token.
    fn emit_word(&self, word: &str, start: usize, position: &mut usize, out: &mut Vec<Token>) {
        let mut push = |text: &str, begin: usize, end: usize| {
            out.push(Token::with_offsets(text, *position, begin, end));
            *position += 1;
        };

        if self.abbreviations.contains(&word.to_lowercase()) {
            push(word, start, start + word.len());
            return;
        }

        for pattern in &self.contractions {
            if let Some(caps) = pattern.captures(word) {
                let mut emitted = false;
                for group in caps.iter().skip(1).flatten() {
                    if !group.as_str().is_empty() {
                        push(group.as_str(), start + group.start(), start + group.end());
                        emitted = true;
                    }
                }
                if emitted {
                    return;
                }
            }
        }

        push(word, start, start + word.len());
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut offset = 0;

        // split_word_bounds yields contiguous segments, so a running
        // byte cursor recovers exact offsets without searching.
        for segment in text.split_word_bounds() {
            if segment.chars().any(|c| c.is_alphanumeric()) {
                self.emit_word(segment, offset, &mut position, &mut tokens);
            }
            offset += segment.len();
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
