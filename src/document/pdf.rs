//! PDF text extraction over lopdf.
//!
//! Opens a document, walks its pages in order, and extracts the plain
//! text of each. Layout reconstruction is entirely lopdf's business;
//! this module only adapts its API to the [`DocumentExtractor`] seam
//! and its errors to [`RubricaError`].

use std::path::Path;

use log::info;
use lopdf::Document;

use crate::document::DocumentExtractor;
use crate::error::{Result, RubricaError};

/// Extracts page texts from PDF files.
#[derive(Clone, Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        PdfExtractor
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let doc = Document::load(path).map_err(|e| {
            RubricaError::document(format!("failed to open {}: {e}", path.display()))
        })?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        info!("Extracting text from {} pages...", page_numbers.len());

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            let text = doc.extract_text(&[page_number]).map_err(|e| {
                RubricaError::document(format!(
                    "failed to extract text from page {page_number}: {e}"
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
