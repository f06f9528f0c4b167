//! Pretrained linguistic model management.
//!
//! Two artifacts back the analysis pipeline: the tokenizer rule tables
//! and the averaged-perceptron tagger weights. [`ResourceRegistry`]
//! keeps them present in a local cache, fetching from the remote model
//! repository on first use; [`LinguisticModels`] loads the cached
//! files and hands the pipeline shared, ready-to-use collaborators.

use std::path::Path;
use std::sync::Arc;

use crate::analysis::tagger::{PerceptronTagger, Tagger};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::config::ResourceConfig;
use crate::error::Result;

pub mod registry;

pub use registry::{ResourceRegistry, TAGGER_WEIGHTS, TOKENIZER_RULES};

/// The loaded tokenizer and tagger, shared by reference.
///
/// Loading happens once; the tables are immutable afterwards, so the
/// same instance can back any number of analyses.
#[derive(Clone)]
pub struct LinguisticModels {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn Tagger>,
}

impl LinguisticModels {
    /// Ensure both resources are present locally, then load them.
    ///
    /// Probes the cache first, fetches on a miss, and fails fatally if
    /// either artifact cannot be obtained or parsed. The pipeline
    /// cannot run in a degraded mode.
    pub fn ensure(config: &ResourceConfig) -> Result<Self> {
        let registry = ResourceRegistry::from_config(config);
        let tokenizer_path = registry.ensure(TOKENIZER_RULES)?;
        let tagger_path = registry.ensure(TAGGER_WEIGHTS)?;
        Self::from_files(&tokenizer_path, &tagger_path)
    }

    /// Load models from already-present artifact files.
    pub fn from_files(tokenizer_path: &Path, tagger_path: &Path) -> Result<Self> {
        let tokenizer = WordTokenizer::from_file(tokenizer_path)?;
        let tagger = PerceptronTagger::from_file(tagger_path)?;

        Ok(LinguisticModels {
            tokenizer: Arc::new(tokenizer),
            tagger: Arc::new(tagger),
        })
    }

    /// Build from explicit collaborators (used by tests and embedders).
    pub fn from_parts(tokenizer: Arc<dyn Tokenizer>, tagger: Arc<dyn Tagger>) -> Self {
        LinguisticModels { tokenizer, tagger }
    }

    /// The shared tokenizer.
    pub fn tokenizer(&self) -> Arc<dyn Tokenizer> {
        Arc::clone(&self.tokenizer)
    }

    /// The shared tagger.
    pub fn tagger(&self) -> Arc<dyn Tagger> {
        Arc::clone(&self.tagger)
    }
}
