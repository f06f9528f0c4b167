//! Local cache and remote fetch for linguistic resources.
//!
//! The registry speaks the Hugging Face Hub protocol: a model
//! repository identified by `owner/name`, artifacts addressed by file
//! name, and the standard snapshot cache layout on disk. Probing is
//! offline; fetching downloads into the cache exactly once per missing
//! artifact, with no retry.

use std::path::PathBuf;

use hf_hub::Cache;
use hf_hub::api::sync::ApiBuilder;
use log::{info, warn};

use crate::config::ResourceConfig;
use crate::error::{Result, RubricaError};

/// File name of the tokenizer rule tables inside the model repository.
pub const TOKENIZER_RULES: &str = "tokenizer_rules.json";

/// File name of the tagger weights inside the model repository.
pub const TAGGER_WEIGHTS: &str = "perceptron_tagger.json";

/// Probe-then-fetch access to one remote model repository.
#[derive(Clone, Debug)]
pub struct ResourceRegistry {
    repo_id: String,
    cache_dir: PathBuf,
}

impl ResourceRegistry {
    /// Create a registry for the given repository and cache directory.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(repo_id: S, cache_dir: P) -> Self {
        ResourceRegistry {
            repo_id: repo_id.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Create a registry from a resource configuration.
    pub fn from_config(config: &ResourceConfig) -> Self {
        Self::new(config.repo_id.clone(), config.cache_dir())
    }

    /// The repository this registry reads from.
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Check the local cache for an artifact. No network access.
    pub fn probe(&self, filename: &str) -> Option<PathBuf> {
        Cache::new(self.cache_dir.clone())
            .model(self.repo_id.clone())
            .get(filename)
    }

    /// Download an artifact into the cache.
    ///
    /// A failure here is fatal for the pipeline; callers get the
    /// underlying cause in the error message.
    pub fn fetch(&self, filename: &str) -> Result<PathBuf> {
        let api = ApiBuilder::new()
            .with_cache_dir(self.cache_dir.clone())
            .build()
            .map_err(|e| {
                RubricaError::resource(format!("hub API initialization failed: {e}"))
            })?;

        api.model(self.repo_id.clone()).get(filename).map_err(|e| {
            RubricaError::resource(format!(
                "failed to fetch '{filename}' from '{}': {e}",
                self.repo_id
            ))
        })
    }

    /// Return a local path for the artifact, fetching it on a cache miss.
    pub fn ensure(&self, filename: &str) -> Result<PathBuf> {
        if let Some(path) = self.probe(filename) {
            info!("Resource '{filename}' found in cache.");
            return Ok(path);
        }

        warn!("Resource '{filename}' not found locally. Downloading...");
        let path = self.fetch(filename)?;
        info!("Resource '{filename}' downloaded successfully.");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_misses_on_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ResourceRegistry::new("rubrica/english-tagger", dir.path());

        assert!(registry.probe(TOKENIZER_RULES).is_none());
        assert!(registry.probe(TAGGER_WEIGHTS).is_none());
    }

    #[test]
    fn test_registry_carries_config() {
        let config = ResourceConfig {
            repo_id: "someone/some-model".to_string(),
            cache_dir: Some(PathBuf::from("/tmp/cache")),
        };
        let registry = ResourceRegistry::from_config(&config);
        assert_eq!(registry.repo_id(), "someone/some-model");
    }
}
