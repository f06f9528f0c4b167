//! Document text extraction.
//!
//! The analysis pipeline treats the source document as an opaque
//! sequence of page texts. The [`DocumentExtractor`] trait is the seam:
//! the production implementation wraps a PDF library, tests substitute
//! in-memory fixtures.

use std::path::Path;

use crate::error::Result;

/// Trait for collaborators that turn a document file into page texts.
pub trait DocumentExtractor: Send + Sync {
    /// Extract the plain text of every page, in document order.
    ///
    /// Any failure — missing file, corrupt format, unreadable page —
    /// fails the whole document; there is no partial result.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;

    /// Get the name of this extractor (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual extractor modules
pub mod pdf;

// Re-export for convenient access
pub use pdf::PdfExtractor;
