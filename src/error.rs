//! Error types for readme-help.

use std::io;
use thiserror::Error;

/// Result type alias for readme-help operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building help text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested heading does not exist in the document.
    #[error("Chapter not found: no level {level} heading \"{heading}\"")]
    ChapterNotFound {
        /// Heading label that was searched for
        heading: String,
        /// Heading level that was searched for
        level: usize,
    },

    /// Heading levels start at 1.
    #[error("Invalid heading level: {0} (levels start at 1)")]
    InvalidLevel(usize),

    /// Error serializing a report.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
