//! Averaged-perceptron part-of-speech tagger.
//!
//! This module runs inference over a pretrained averaged-perceptron
//! model (the tagger resource fetched by the bootstrapper). The model
//! artifact carries three tables: feature weights, an
//! unambiguous-word tag dictionary, and the class list. No training
//! happens here.
//!
//! Prediction for a word combines contextual features — the two
//! previous tags, neighboring words, prefix and suffix shape — which is
//! why the whole sequence must be tagged in one call.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::analysis::tagger::Tagger;
use crate::error::{Result, RubricaError};

/// Hash map keyed with ahash, used for the hot weight lookups.
type FastMap<K, V> = HashMap<K, V, RandomState>;

/// Sentinel context entries surrounding the word sequence.
const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];

/// Pretrained averaged-perceptron model tables.
///
/// `weights` maps a feature key to per-class weights. `tagdict` maps
/// words that were unambiguous in the training corpus straight to
/// their tag, bypassing prediction. `classes` is the full tag set;
/// its order is not significant, ties in scoring break toward the
/// lexicographically greatest class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerceptronModel {
    pub weights: FastMap<String, FastMap<String, f64>>,
    #[serde(default)]
    pub tagdict: FastMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl PerceptronModel {
    /// Load a model artifact from a JSON resource file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let model: PerceptronModel = serde_json::from_reader(BufReader::new(file))?;
        if model.classes.is_empty() {
            return Err(RubricaError::resource(
                "perceptron model has an empty class list",
            ));
        }
        Ok(model)
    }
}

/// Part-of-speech tagger running averaged-perceptron inference.
pub struct PerceptronTagger {
    model: PerceptronModel,
}

impl PerceptronTagger {
    /// Create a tagger over an already-deserialized model.
    pub fn from_model(model: PerceptronModel) -> Self {
        PerceptronTagger { model }
    }

    /// Load the tagger from a JSON resource file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_model(PerceptronModel::from_file(path)?))
    }

    /// Normalize a word for context lookup.
    ///
    /// Hyphenated words, four-digit numbers, and other digit-initial
    /// words collapse to shape markers; everything else lowercases.
    fn normalize(word: &str) -> String {
        if word.contains('-') && !word.starts_with('-') {
            "!HYPHEN".to_string()
        } else if word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
            "!YEAR".to_string()
        } else if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            "!DIGITS".to_string()
        } else {
            word.to_lowercase()
        }
    }

    /// Last three characters of a word (whole word when shorter).
    fn suffix(word: &str) -> &str {
        match word.char_indices().rev().nth(2) {
            Some((idx, _)) => &word[idx..],
            None => word,
        }
    }

    /// First character of a word as a string slice.
    fn prefix(word: &str) -> &str {
        match word.char_indices().nth(1) {
            Some((idx, _)) => &word[..idx],
            None => word,
        }
    }

    /// Build the feature keys for position `i` (index into `context`,
    /// already shifted past the start sentinels).
    fn features(word: &str, context: &[String], i: usize, prev: &str, prev2: &str) -> Vec<String> {
        let mut features = Vec::with_capacity(14);
        let mut add = |parts: &[&str]| features.push(parts.join(" "));

        add(&["bias"]);
        add(&["i suffix", Self::suffix(word)]);
        add(&["i pref1", Self::prefix(word)]);
        add(&["i-1 tag", prev]);
        add(&["i-2 tag", prev2]);
        add(&["i tag+i-2 tag", prev, prev2]);
        add(&["i word", &context[i]]);
        add(&["i-1 tag+i word", prev, &context[i]]);
        add(&["i-1 word", &context[i - 1]]);
        add(&["i-1 suffix", Self::suffix(&context[i - 1])]);
        add(&["i-2 word", &context[i - 2]]);
        add(&["i+1 word", &context[i + 1]]);
        add(&["i+1 suffix", Self::suffix(&context[i + 1])]);
        add(&["i+2 word", &context[i + 2]]);

        features
    }

    /// Score every class against the active features and return the
    /// best one. Ties break toward the lexicographically greatest
    /// class so repeated runs agree.
    fn predict(&self, features: &[String]) -> &str {
        let mut scores: FastMap<&str, f64> = FastMap::default();
        for feature in features {
            if let Some(class_weights) = self.model.weights.get(feature) {
                for (class, weight) in class_weights {
                    *scores.entry(class.as_str()).or_insert(0.0) += weight;
                }
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for class in &self.model.classes {
            let score = scores.get(class.as_str()).copied().unwrap_or(0.0);
            match best {
                Some((_, best_score)) if score < best_score => {}
                // classes iterate in ascending order, so >= keeps the
                // greatest class among equal scores
                _ => best = Some((class.as_str(), score)),
            }
        }

        best.map(|(class, _)| class).unwrap_or_default()
    }
}

impl Tagger for PerceptronTagger {
    fn tag(&self, words: &[String]) -> Result<Vec<String>> {
        if words.is_empty() {
            return Ok(Vec::new());
        }

        let mut context: Vec<String> = Vec::with_capacity(words.len() + 4);
        context.extend(START.iter().map(|s| s.to_string()));
        context.extend(words.iter().map(|w| Self::normalize(w)));
        context.extend(END.iter().map(|s| s.to_string()));

        let mut tags = Vec::with_capacity(words.len());
        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();

        for (i, word) in words.iter().enumerate() {
            let tag = match self.model.tagdict.get(word.as_str()) {
                Some(tag) => tag.clone(),
                None => {
                    let features =
                        Self::features(word, &context, i + START.len(), &prev, &prev2);
                    self.predict(&features).to_string()
                }
            };
            prev2 = std::mem::replace(&mut prev, tag.clone());
            tags.push(tag);
        }

        Ok(tags)
    }

    fn name(&self) -> &'static str {
        "perceptron"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<const N: usize>(entries: [(&str, f64); N]) -> FastMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    /// A tiny hand-built model: "the" is unambiguous, nouns win by
    /// default, and a word right after a determiner leans noun while a
    /// word after a pronoun leans verb.
    fn fixture_tagger() -> PerceptronTagger {
        let mut weights: FastMap<String, FastMap<String, f64>> = FastMap::default();
        weights.insert("bias".to_string(), map([("NN", 1.0), ("VBD", 0.5)]));
        weights.insert("i-1 tag PRP".to_string(), map([("VBD", 2.0)]));
        weights.insert("i-1 tag DT".to_string(), map([("NN", 2.0)]));
        weights.insert("i suffix ran".to_string(), map([("VBD", 1.0)]));

        let mut tagdict: FastMap<String, String> = FastMap::default();
        tagdict.insert("the".to_string(), "DT".to_string());
        tagdict.insert("she".to_string(), "PRP".to_string());

        let classes: BTreeSet<String> = ["DT", "NN", "PRP", "VBD"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        PerceptronTagger::from_model(PerceptronModel {
            weights,
            tagdict,
            classes,
        })
    }

    fn tag_all(tagger: &PerceptronTagger, words: &[&str]) -> Vec<String> {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        tagger.tag(&words).unwrap()
    }

    #[test]
    fn test_empty_sequence() {
        let tagger = fixture_tagger();
        assert!(tag_all(&tagger, &[]).is_empty());
    }

    #[test]
    fn test_tagdict_short_circuits_prediction() {
        let tagger = fixture_tagger();
        assert_eq!(tag_all(&tagger, &["the"]), vec!["DT"]);
    }

    #[test]
    fn test_context_sensitivity() {
        let tagger = fixture_tagger();
        // Same surface word, different neighborhood, different tag.
        assert_eq!(tag_all(&tagger, &["the", "run"]), vec!["DT", "NN"]);
        assert_eq!(tag_all(&tagger, &["she", "run"]), vec!["PRP", "VBD"]);
    }

    #[test]
    fn test_one_tag_per_word() {
        let tagger = fixture_tagger();
        let tags = tag_all(&tagger, &["the", "cat", "ran", "home"]);
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[0], "DT");
        assert_eq!(tags[2], "VBD");
    }

    #[test]
    fn test_tie_breaks_toward_greatest_class() {
        let weights: FastMap<String, FastMap<String, f64>> = FastMap::default();
        let classes: BTreeSet<String> =
            ["AA", "ZZ"].iter().map(|s| s.to_string()).collect();
        let tagger = PerceptronTagger::from_model(PerceptronModel {
            weights,
            tagdict: FastMap::default(),
            classes,
        });

        // No weights at all: every class scores 0.0, ZZ wins.
        assert_eq!(tag_all(&tagger, &["anything"]), vec!["ZZ"]);
    }

    #[test]
    fn test_normalize_shapes() {
        assert_eq!(PerceptronTagger::normalize("Well-known"), "!HYPHEN");
        assert_eq!(PerceptronTagger::normalize("1984"), "!YEAR");
        assert_eq!(PerceptronTagger::normalize("12"), "!DIGITS");
        assert_eq!(PerceptronTagger::normalize("Cat"), "cat");
        assert_eq!(PerceptronTagger::normalize("-dash"), "-dash");
    }

    #[test]
    fn test_suffix_and_prefix_are_char_aware() {
        assert_eq!(PerceptronTagger::suffix("walking"), "ing");
        assert_eq!(PerceptronTagger::suffix("at"), "at");
        assert_eq!(PerceptronTagger::suffix("tréma"), "éma");
        assert_eq!(PerceptronTagger::prefix("cat"), "c");
        assert_eq!(PerceptronTagger::prefix("über"), "ü");
    }

    #[test]
    fn test_model_rejects_empty_class_list() {
        let json = r#"{"weights": {}, "tagdict": {}, "classes": []}"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagger.json");
        std::fs::write(&path, json).unwrap();
        assert!(PerceptronModel::from_file(&path).is_err());
    }

    #[test]
    fn test_idempotent_tagging() {
        let tagger = fixture_tagger();
        let words = ["she", "ran", "the", "race"];
        assert_eq!(tag_all(&tagger, &words), tag_all(&tagger, &words));
    }
}
