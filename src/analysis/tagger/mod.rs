//! Part-of-speech tagger implementations.

use crate::error::Result;

/// Trait for taggers that assign a grammatical tag code to each word.
///
/// Tagging is context-sensitive: implementations receive the whole
/// word sequence in one call and must return exactly one tag code per
/// input word, in order. Callers must not tag word-by-word.
pub trait Tagger: Send + Sync {
    /// Tag a sequence of words with grammatical category codes.
    fn tag(&self, words: &[String]) -> Result<Vec<String>>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tagger modules
pub mod perceptron;

// Re-export for convenient access
pub use perceptron::{PerceptronModel, PerceptronTagger};
