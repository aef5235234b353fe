//! Error types for the timetable feed.

use thiserror::Error;

/// Errors that can occur while fetching or decoding a published document.
#[derive(Debug, Error, Clone)]
pub enum TimetableError {
    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered with a non-success status
    #[error("Unexpected status {status} fetching {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON for the expected document
    #[error("Malformed document at {url}: {message}")]
    Malformed { url: String, message: String },

    /// The configured base URL could not be parsed or extended
    #[error("Invalid base URL: {message}")]
    BaseUrl { message: String },
}

impl TimetableError {
    /// Returns true if this error is potentially transient and a later
    /// fetch of the same document may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TimetableError::Network { .. } | TimetableError::Status { .. }
        )
    }
}

impl From<reqwest::Error> for TimetableError {
    fn from(err: reqwest::Error) -> Self {
        TimetableError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for TimetableError {
    fn from(err: url::ParseError) -> Self {
        TimetableError::BaseUrl {
            message: err.to_string(),
        }
    }
}
