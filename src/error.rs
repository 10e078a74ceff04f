//! Error types for pagecast.
//!
//! This module defines the error types returned by extraction and
//! summarization operations.

/// Error type for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL could not be decomposed into scheme/host/path.
    #[error("invalid source URL: {0}")]
    InvalidUrl(String),

    /// No extractable content was found in the document.
    #[error("no extractable content found")]
    NoContent,

    /// The extracted document is below the minimum-content gate.
    #[error("insufficient content: {words} words (minimum {required})")]
    InsufficientContent {
        /// Words found in the extracted body.
        words: usize,
        /// Words required by the gate.
        required: usize,
    },

    /// An error escaped chunk-level handling in the summarization pipeline.
    #[error("summarization failed: {0}")]
    Summarization(String),

    /// A summarization backend rejected or failed a call.
    #[error("summarizer backend error: {0}")]
    Backend(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
