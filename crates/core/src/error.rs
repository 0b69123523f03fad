//! Error types for Recast operations.
//!
//! This module defines the main error type [`RecastError`] which covers
//! every stage of the rewrite pipeline: fetching the page, extracting its
//! content, and generating the rewrite. Keeping the stages as distinct
//! variants lets callers render a different message for each failure class
//! instead of a single catch-all.
//!
//! # Example
//!
//! ```rust
//! use recast_core::{RecastError, Result};
//!
//! fn check_page(text: &str) -> Result<()> {
//!     if text.is_empty() {
//!         return Err(RecastError::NoContent);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for the rewrite pipeline.
///
/// Fetch-stage variants carry the `Error occurred` prefix in their display
/// text so a failed fetch remains recognizable to users of the original
/// tool, while still being a proper error value rather than in-band content.
#[derive(Error, Debug)]
pub enum RecastError {
    /// Transport-level fetch failure (DNS, connection, TLS).
    #[error("Error occurred: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The page responded with a non-success HTTP status.
    #[error("Error occurred: HTTP status {status} while fetching the page")]
    FetchFailed { status: u16 },

    /// Fetch exceeded the configured timeout.
    #[error("Error occurred: request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No extraction strategy matched a content container.
    #[error("No readable content could be extracted from the page")]
    NoContent,

    /// The API key was not present in the process environment.
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// The model endpoint responded with a non-success HTTP status.
    #[error("Model API returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Transport-level failure while calling the model endpoint.
    #[error("Model request failed: {0}")]
    ModelRequestError(#[source] reqwest::Error),

    /// The model response contained no completion choices.
    #[error("Model returned an empty completion")]
    EmptyCompletion,
}

impl RecastError {
    /// True for errors raised while fetching the source page.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            RecastError::HttpError(_)
                | RecastError::FetchFailed { .. }
                | RecastError::Timeout { .. }
                | RecastError::InvalidUrl(_)
        )
    }

    /// True for errors raised while calling the chat-completion model.
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            RecastError::MissingApiKey
                | RecastError::ApiError { .. }
                | RecastError::ModelRequestError(_)
                | RecastError::EmptyCompletion
        )
    }
}

/// Result type alias for RecastError.
///
/// This is a convenience alias for `std::result::Result<T, RecastError>`.
pub type Result<T> = std::result::Result<T, RecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_display() {
        let err = RecastError::FetchFailed { status: 404 };
        assert!(err.to_string().contains("Error occurred"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_timeout_display() {
        let err = RecastError::Timeout { timeout: 30 };
        assert!(err.to_string().starts_with("Error occurred"));
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_api_error_display() {
        let err = RecastError::ApiError { status: 401, message: "invalid key".to_string() };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_error_classification() {
        assert!(RecastError::FetchFailed { status: 500 }.is_fetch_error());
        assert!(!RecastError::FetchFailed { status: 500 }.is_model_error());
        assert!(RecastError::EmptyCompletion.is_model_error());
        assert!(!RecastError::NoContent.is_fetch_error());
        assert!(!RecastError::NoContent.is_model_error());
    }
}
