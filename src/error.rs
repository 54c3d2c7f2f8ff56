//! Error types for hakbot
//!
//! This module provides the error taxonomy for the whole pipeline. Only
//! `Validation` errors ever surface to a caller as a failure; timeouts and
//! dependency outages are absorbed by fallback paths in the retrieval and
//! synthesis layers.

use thiserror::Error;

/// Main error type for hakbot operations
#[derive(Error, Debug)]
pub enum HakbotError {
    /// Bad input shape or range, with field detail. Never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A dependency exceeded its time budget; callers fall back, not fail.
    #[error("Dependency timeout: {0}")]
    DependencyTimeout(String),

    /// Embedding backend failed after all retries
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// Completion API failed or returned an unusable reply
    #[error("Completion unavailable: {0}")]
    CompletionUnavailable(String),

    /// Database/storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Generic errors
    #[error("Generic error: {0}")]
    Generic(String),
}

/// Result type alias for hakbot operations
pub type Result<T> = std::result::Result<T, HakbotError>;

impl From<anyhow::Error> for HakbotError {
    fn from(err: anyhow::Error) -> Self {
        HakbotError::Generic(err.to_string())
    }
}

impl HakbotError {
    /// Whether this error may be surfaced to the end user as a failure.
    /// Everything else must degrade to a best-effort answer.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, HakbotError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = HakbotError::Validation("monthly salary must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Validation error: monthly salary must be positive"
        );
    }

    #[test]
    fn test_error_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HakbotError::from(io_error);

        match err {
            HakbotError::Io(_) => (),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_only_validation_is_user_facing() {
        assert!(HakbotError::Validation("x".into()).is_user_facing());
        assert!(!HakbotError::DependencyTimeout("x".into()).is_user_facing());
        assert!(!HakbotError::EmbeddingUnavailable("x".into()).is_user_facing());
        assert!(!HakbotError::CompletionUnavailable("x".into()).is_user_facing());
    }
}
