//! Error types for rapid_summarizer
//!
//! Segmentation and selection failures are surfaced to the caller.
//! Degenerate similarity vectors are resolved inside the scorer and never
//! appear here.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors that can stop a summarization run
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Segmentation produced no sentences (blank or delimiter-only input)
    #[error("input text contains no sentences")]
    EmptyInput,

    /// More sentences were requested than the text contains
    #[error("requested {requested} sentences but only {available} are available")]
    InsufficientSentences { requested: usize, available: usize },

    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizeError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
