//! Error types for the FeedDeck engine
//!
//! This module provides the crate-wide error hierarchy:
//! - `thiserror` for ergonomic error definitions
//! - Domain-specific error variants for actionable error handling
//! - Proper error context and source chaining

use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for FeedDeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the FeedDeck engine
#[derive(Debug, Error)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Configuration error: {message}")]
    Config {
        message: Cow<'static, str>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig {
        key: &'static str,
        message: Cow<'static, str>,
    },

    // ========================================================================
    // Content Store Errors
    // ========================================================================
    #[error("Invalid section: {value}")]
    InvalidSection { value: String },

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    // ========================================================================
    // Content Source Errors
    // ========================================================================
    #[error("Content source error: {message}")]
    Source {
        message: Cow<'static, str>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Content source HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    #[error("Preference storage error: {message}")]
    Storage {
        message: Cow<'static, str>,
        #[source]
        source: Option<std::io::Error>,
    },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    // ========================================================================
    // Constructors for common error patterns
    // ========================================================================

    /// Create a configuration error
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a content source error
    pub fn source(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Source {
            message: message.into(),
            source: None,
        }
    }

    /// Create a content source error with source
    pub fn source_with_source(
        message: impl Into<Cow<'static, str>>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Source {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a preference storage error
    pub fn storage(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a preference storage error with an I/O source
    pub fn storage_with_source(
        message: impl Into<Cow<'static, str>>,
        source: std::io::Error,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Whether a `load_more` failure with this error is retryable.
    ///
    /// Source and HTTP errors leave the store intact, so the caller may
    /// simply invoke `load_more` again. Caller bugs (bad indices, bad
    /// section labels) are not retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Source { .. } | Self::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSection {
            value: "archive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid section: archive");

        let err = Error::IndexOutOfRange { index: 9, len: 4 };
        assert_eq!(
            err.to_string(),
            "Index 9 out of range for list of length 4"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(Error::source("feed unavailable").is_retryable());
        assert!(!Error::IndexOutOfRange { index: 0, len: 0 }.is_retryable());
        assert!(!Error::config("bad").is_retryable());
    }
}
