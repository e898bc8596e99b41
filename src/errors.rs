//! Error types for section_summarizer
//!
//! The scoring core is total over string input and never fails. Errors only
//! come from configuration validation and from the article source.

use thiserror::Error;

/// Result type alias using [`SummarizerError`]
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Errors surfaced by the summarizer and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizerError {
    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The requested article does not exist at the source
    #[error("article not found: {0}")]
    ArticleNotFound(String),

    /// Transport, HTTP status, or decoding failure while fetching an article
    #[error("failed to fetch article: {0}")]
    Fetch(String),
}

impl SummarizerError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an article-not-found error
    pub fn not_found(page_name: impl Into<String>) -> Self {
        Self::ArticleNotFound(page_name.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Whether this error came from the article source rather than the caller
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ArticleNotFound(_) | Self::Fetch(_))
    }
}
