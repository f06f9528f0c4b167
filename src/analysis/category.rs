//! Grammatical word classes and the exclusion policy.
//!
//! The part-of-speech tagger emits short tag codes (Penn Treebank
//! style: `DT`, `VBD`, `NNS`, ...). Those codes cross into the rest of
//! the system exactly once, here, where [`WordClass::from_code`]
//! collapses them into a closed enum. Everything downstream works with
//! the enum; no other module inspects tag strings.
//!
//! # Examples
//!
//! ```
//! use rubrica::analysis::category::WordClass;
//!
//! assert_eq!(WordClass::from_code("DT"), WordClass::Determiner);
//! assert_eq!(WordClass::from_code("VBG"), WordClass::Verb);
//! assert_eq!(WordClass::from_code("NNS"), WordClass::Noun);
//! assert!(WordClass::from_code("VBZ").is_excluded());
//! assert!(!WordClass::from_code("NN").is_excluded());
//! ```

use serde::{Deserialize, Serialize};

/// Closed classification of a token's grammatical role.
///
/// Unknown or future tag codes land in [`WordClass::Other`] and are
/// never excluded from counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    /// Determiners and articles (`DT`)
    Determiner,
    /// Verb forms (`VB`, `VBD`, `VBG`, `VBN`, `VBP`, `VBZ`)
    Verb,
    /// Nouns, common and proper (`NN`, `NNS`, `NNP`, `NNPS`)
    Noun,
    /// Adjectives (`JJ`, `JJR`, `JJS`)
    Adjective,
    /// Adverbs (`RB`, `RBR`, `RBS`)
    Adverb,
    /// Pronouns (`PRP`, `PRP$`)
    Pronoun,
    /// Prepositions and subordinating conjunctions (`IN`)
    Preposition,
    /// Coordinating conjunctions (`CC`)
    Conjunction,
    /// Cardinal numbers (`CD`)
    Numeral,
    /// Modal auxiliaries (`MD`)
    Modal,
    /// Interjections (`UH`)
    Interjection,
    /// Everything else, including unrecognized codes
    Other,
}

impl WordClass {
    /// Ingest a raw tag code from the external tagger.
    ///
    /// Prefix matching happens only here. The determiner and verb
    /// prefixes are the two that drive exclusion; the remaining
    /// mappings exist so reports and tests can speak in classes
    /// rather than code strings.
    pub fn from_code(code: &str) -> WordClass {
        if code.starts_with("DT") {
            WordClass::Determiner
        } else if code.starts_with("VB") {
            WordClass::Verb
        } else if code.starts_with("NN") {
            WordClass::Noun
        } else if code.starts_with("JJ") {
            WordClass::Adjective
        } else if code.starts_with("RB") {
            WordClass::Adverb
        } else if code.starts_with("PRP") {
            WordClass::Pronoun
        } else {
            match code {
                "IN" => WordClass::Preposition,
                "CC" => WordClass::Conjunction,
                "CD" => WordClass::Numeral,
                "MD" => WordClass::Modal,
                "UH" => WordClass::Interjection,
                _ => WordClass::Other,
            }
        }
    }

    /// Whether tokens of this class are excluded from frequency counting.
    ///
    /// Excluded tokens still count toward the section total and the
    /// excluded total; they just never enter the frequency map.
    pub fn is_excluded(&self) -> bool {
        matches!(self, WordClass::Determiner | WordClass::Verb)
    }
}
