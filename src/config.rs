//! Configuration for the analysis pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RubricaError};

/// Default delimiter word marking section boundaries.
pub const DEFAULT_DELIMITER: &str = "Chapter";

/// Default number of ranked words kept per section report.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Default remote repository holding the linguistic resources.
pub const DEFAULT_MODEL_REPO: &str = "rubrica/english-tagger";

/// Settings for section splitting and report shaping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Literal, case-sensitive string that separates sections.
    pub delimiter: String,
    /// Maximum number of ranked words per section report.
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            delimiter: DEFAULT_DELIMITER.to_string(),
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration.
    ///
    /// An empty delimiter has no sensible split semantics and is
    /// rejected rather than interpreted.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(RubricaError::config("delimiter must not be empty"));
        }
        if self.top_words == 0 {
            return Err(RubricaError::config("top_words must be at least 1"));
        }
        Ok(())
    }
}

/// Settings for locating and caching the linguistic resources.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Remote model repository (`owner/name`).
    pub repo_id: String,
    /// Cache directory override; `None` uses the conventional per-user
    /// cache location.
    pub cache_dir: Option<PathBuf>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            repo_id: DEFAULT_MODEL_REPO.to_string(),
            cache_dir: None,
        }
    }
}

impl ResourceConfig {
    /// Resolve the effective cache directory.
    ///
    /// Honors `HF_HOME`, then falls back to `~/.cache/huggingface`,
    /// then to a temp-directory cache for environments without a home.
    pub fn cache_dir(&self) -> PathBuf {
        if let Some(dir) = &self.cache_dir {
            return dir.clone();
        }

        std::env::var("HF_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                std::env::var("HOME").map(|home| PathBuf::from(home).join(".cache/huggingface"))
            })
            .unwrap_or_else(|_| std::env::temp_dir().join("huggingface"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_analysis_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter, "Chapter");
        assert_eq!(config.top_words, 10);
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let config = AnalysisConfig {
            delimiter: String::new(),
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_top_words_rejected() {
        let config = AnalysisConfig {
            top_words: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_cache_dir_wins() {
        let config = ResourceConfig {
            repo_id: DEFAULT_MODEL_REPO.to_string(),
            cache_dir: Some(PathBuf::from("/tmp/models")),
        };
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/models"));
    }
}
