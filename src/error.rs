//! Error types for the docsift library.
//!
//! The analysis core itself never fails: counting, tree insertion, search and
//! history transitions are total. Errors only appear at the edges, when a
//! configuration is loaded or a document is read by a caller such as the CLI.
//! All of them are represented by [`DocsiftError`].
//!
//! # Examples
//!
//! ```
//! use docsift::error::{DocsiftError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocsiftError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for docsift operations.
#[derive(Error, Debug)]
pub enum DocsiftError {
    /// I/O errors (reading documents or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, ingestion)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DocsiftError.
pub type Result<T> = std::result::Result<T, DocsiftError>;

impl DocsiftError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DocsiftError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DocsiftError::InvalidArgument(msg.into())
    }
}
