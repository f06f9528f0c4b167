//! Document analysis orchestration.
//!
//! One call runs the whole pipeline: ensure linguistic resources,
//! extract page texts, join them, split into sections, analyze each
//! section, and assemble the ranked reports.
//!
//! Error discipline follows two tiers. A resource failure is fatal and
//! returns `Err` before any document I/O. A document-read failure is
//! recoverable at this level and becomes [`AnalysisOutcome::Error`],
//! so callers always check the outcome discriminator.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use log::debug;

use crate::analysis::counter::WordCounter;
use crate::config::{AnalysisConfig, ResourceConfig};
use crate::document::{DocumentExtractor, PdfExtractor};
use crate::error::Result;
use crate::model::LinguisticModels;
use crate::report::{AnalysisOutcome, SectionReport};
use crate::section::split_sections;

/// Top-level analyzer owning the pipeline's collaborators.
///
/// Linguistic models load on first use and are shared by reference
/// afterwards; repeated `analyze_document` calls never reinitialize
/// them. The document extractor is injectable for tests.
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
    resources: ResourceConfig,
    extractor: Arc<dyn DocumentExtractor>,
    models: OnceLock<LinguisticModels>,
}

impl DocumentAnalyzer {
    /// Create an analyzer with default configuration and the PDF
    /// extractor.
    pub fn new() -> Self {
        DocumentAnalyzer {
            config: AnalysisConfig::default(),
            resources: ResourceConfig::default(),
            extractor: Arc::new(PdfExtractor::new()),
            models: OnceLock::new(),
        }
    }

    /// Create an analyzer with explicit configuration.
    pub fn with_config(config: AnalysisConfig, resources: ResourceConfig) -> Result<Self> {
        config.validate()?;
        Ok(DocumentAnalyzer {
            config,
            resources,
            extractor: Arc::new(PdfExtractor::new()),
            models: OnceLock::new(),
        })
    }

    /// Replace the document extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Pre-seed the linguistic models, skipping the bootstrap.
    pub fn with_models(self, models: LinguisticModels) -> Self {
        let _ = self.models.set(models);
        self
    }

    /// The analyzer's section/report configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Init-on-first-use access to the linguistic models.
    fn models(&self) -> Result<&LinguisticModels> {
        if let Some(models) = self.models.get() {
            return Ok(models);
        }
        let loaded = LinguisticModels::ensure(&self.resources)?;
        Ok(self.models.get_or_init(|| loaded))
    }

    /// Analyze a document file.
    ///
    /// Resource bootstrap failures return `Err` and abort before any
    /// document I/O. Extraction failures yield the error outcome with
    /// the underlying cause in the message.
    pub fn analyze_document<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisOutcome> {
        let models = self.models()?;

        let pages = match self.extractor.extract_pages(path.as_ref()) {
            Ok(pages) => pages,
            Err(e) => {
                return Ok(AnalysisOutcome::Error(format!("Error reading PDF: {e}")));
            }
        };

        let mut full_text = String::new();
        for page in &pages {
            full_text.push_str(page);
            full_text.push('\n');
        }

        Ok(AnalysisOutcome::Success(
            self.analyze_text(&full_text, models)?,
        ))
    }

    /// Split text into sections and analyze each in document order.
    fn analyze_text(
        &self,
        full_text: &str,
        models: &LinguisticModels,
    ) -> Result<IndexMap<String, SectionReport>> {
        let counter = WordCounter::new(models.tokenizer(), models.tagger());

        let mut reports = IndexMap::new();
        for section in split_sections(full_text, &self.config.delimiter) {
            debug!("Analyzing section '{}'", section.name);
            let stats = counter.analyze(&section.text)?;
            reports.insert(
                section.name,
                SectionReport::from_stats(&stats, self.config.top_words),
            );
        }

        Ok(reports)
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tagger::Tagger;
    use crate::analysis::tokenizer::WordTokenizer;
    use crate::error::RubricaError;

    /// Test double: determiners and a few verbs from a fixed list,
    /// nouns otherwise.
    struct FixedTagger;

    impl Tagger for FixedTagger {
        fn tag(&self, words: &[String]) -> Result<Vec<String>> {
            Ok(words
                .iter()
                .map(|word| {
                    match word.as_str() {
                        "the" | "a" | "an" => "DT",
                        "ran" | "sat" | "is" | "was" => "VBD",
                        _ => "NN",
                    }
                    .to_string()
                })
                .collect())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct PagesExtractor {
        pages: Vec<String>,
    }

    impl DocumentExtractor for PagesExtractor {
        fn extract_pages(&self, _path: &Path) -> Result<Vec<String>> {
            Ok(self.pages.clone())
        }

        fn name(&self) -> &'static str {
            "pages"
        }
    }

    struct FailingExtractor;

    impl DocumentExtractor for FailingExtractor {
        fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
            Err(RubricaError::document(format!(
                "failed to open {}: not a PDF",
                path.display()
            )))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn analyzer_with_pages(pages: &[&str]) -> DocumentAnalyzer {
        DocumentAnalyzer::new()
            .with_extractor(Arc::new(PagesExtractor {
                pages: pages.iter().map(|p| p.to_string()).collect(),
            }))
            .with_models(LinguisticModels::from_parts(
                Arc::new(WordTokenizer::new()),
                Arc::new(FixedTagger),
            ))
    }

    #[test]
    fn test_single_section_document() {
        let analyzer = analyzer_with_pages(&["The cat ran.", "The dog sat."]);
        let outcome = analyzer.analyze_document("book.pdf").unwrap();

        let AnalysisOutcome::Success(reports) = outcome else {
            panic!("expected success");
        };
        assert_eq!(reports.len(), 1);

        let report = &reports["Introduction/Preface"];
        assert_eq!(report.total_words, 6);
        assert_eq!(report.excluded_words, 4);
        assert_eq!(report.counted_words_total, 2);
    }

    #[test]
    fn test_sections_in_document_order() {
        let analyzer = analyzer_with_pages(&[
            "preface words Chapter granite peaks",
            "Chapter willow groves",
        ]);
        let outcome = analyzer.analyze_document("book.pdf").unwrap();

        let AnalysisOutcome::Success(reports) = outcome else {
            panic!("expected success");
        };
        let names: Vec<&str> = reports.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["Introduction/Preface", "Chapter 1", "Chapter 2"]);
    }

    #[test]
    fn test_extraction_failure_becomes_error_outcome() {
        let analyzer = DocumentAnalyzer::new()
            .with_extractor(Arc::new(FailingExtractor))
            .with_models(LinguisticModels::from_parts(
                Arc::new(WordTokenizer::new()),
                Arc::new(FixedTagger),
            ));

        let outcome = analyzer.analyze_document("missing.pdf").unwrap();
        let AnalysisOutcome::Error(message) = outcome else {
            panic!("expected error outcome");
        };
        assert!(message.starts_with("Error reading PDF:"));
        assert!(message.contains("missing.pdf"));
    }

    #[test]
    fn test_empty_document_yields_no_sections() {
        let analyzer = analyzer_with_pages(&[]);
        let outcome = analyzer.analyze_document("empty.pdf").unwrap();

        assert_eq!(outcome, AnalysisOutcome::Success(IndexMap::new()));
    }

    #[test]
    fn test_whitespace_pages_yield_no_sections() {
        let analyzer = analyzer_with_pages(&["   ", "\n\t"]);
        let outcome = analyzer.analyze_document("blank.pdf").unwrap();

        assert_eq!(outcome, AnalysisOutcome::Success(IndexMap::new()));
    }

    #[test]
    fn test_top_words_respect_config() {
        let config = AnalysisConfig {
            delimiter: "Chapter".to_string(),
            top_words: 1,
        };
        let analyzer = DocumentAnalyzer::with_config(config, ResourceConfig::default())
            .unwrap()
            .with_extractor(Arc::new(PagesExtractor {
                pages: vec!["moss moss stone".to_string()],
            }))
            .with_models(LinguisticModels::from_parts(
                Arc::new(WordTokenizer::new()),
                Arc::new(FixedTagger),
            ));

        let outcome = analyzer.analyze_document("book.pdf").unwrap();
        let AnalysisOutcome::Success(reports) = outcome else {
            panic!("expected success");
        };
        let report = &reports["Introduction/Preface"];
        assert_eq!(report.top_words.len(), 1);
        assert_eq!(report.top_words[0].word, "moss");
        assert_eq!(report.top_words[0].count, 2);
    }

    #[test]
    fn test_page_boundary_inserts_newline() {
        // Words split across a page boundary must not merge.
        let analyzer = analyzer_with_pages(&["granite", "willow"]);
        let outcome = analyzer.analyze_document("book.pdf").unwrap();

        let AnalysisOutcome::Success(reports) = outcome else {
            panic!("expected success");
        };
        let report = &reports["Introduction/Preface"];
        assert_eq!(report.total_words, 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            delimiter: String::new(),
            top_words: 10,
        };
        assert!(DocumentAnalyzer::with_config(config, ResourceConfig::default()).is_err());
    }
}
