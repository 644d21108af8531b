//! Error types for content store, synchronizer and mail operations.

use thiserror::Error;

/// Errors raised by the content library.
///
/// Parsing never fails: malformed input degrades to defaults. Only I/O,
/// lookups, serialization and mail delivery produce errors.
#[derive(Error, Debug)]
pub enum ContentError {
    /// I/O error while reading or writing the content store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested section or resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The content file has no front-matter block.
    #[error("Missing front matter in {0}")]
    MissingFrontMatter(String),

    /// Mail delivery failed or is not configured.
    #[error("Mail error: {0}")]
    Mail(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContentError {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a mail error.
    pub fn mail(msg: impl Into<String>) -> Self {
        Self::Mail(msg.into())
    }
}

/// Result type alias using [`ContentError`].
pub type Result<T> = std::result::Result<T, ContentError>;
