//! Custom error types for openalex-metrics.
//!
//! Every fallible operation in the library returns `Result<T, MetricsError>`.

use thiserror::Error;

/// Main error type for openalex-metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Network/HTTP request error, including timeouts
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// OpenAlex answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl MetricsError {
    /// Short machine-friendly name of the failure class, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            MetricsError::Network(e) if e.is_timeout() => "timeout",
            MetricsError::Network(_) => "network",
            MetricsError::Api { code: 404, .. } => "not_found",
            MetricsError::Api { .. } => "api",
            MetricsError::Io(_) => "io",
            MetricsError::Json(_) => "malformed_response",
            MetricsError::Config(_) => "config",
        }
    }

    /// Display text followed by every underlying cause, joined with `": "`.
    ///
    /// The wrapped error's own message is already part of `Display`, so the
    /// walk starts at its source.
    pub fn detailed(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self).and_then(|e| e.source());
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

/// Result type alias using `MetricsError`
pub type Result<T> = std::result::Result<T, MetricsError>;
