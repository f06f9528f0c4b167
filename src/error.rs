//! Error types for the Rubrica library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`RubricaError`] enum.
//!
//! # Examples
//!
//! ```
//! use rubrica::error::{Result, RubricaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RubricaError::analysis("empty token stream"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Rubrica operations.
#[derive(Error, Debug)]
pub enum RubricaError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required linguistic resource is missing and could not be fetched.
    ///
    /// Always fatal: the pipeline cannot run without both pretrained
    /// artifacts.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Document extraction errors (missing file, corrupt format,
    /// unreadable pages).
    #[error("Document error: {0}")]
    Document(String),

    /// Analysis errors (tokenization, tagging, counting).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RubricaError.
pub type Result<T> = std::result::Result<T, RubricaError>;

impl RubricaError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        RubricaError::Resource(msg.into())
    }

    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        RubricaError::Document(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RubricaError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RubricaError::Config(msg.into())
    }
}
