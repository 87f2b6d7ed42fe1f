//! Error types for the retrieval layer.

use thiserror::Error;

/// Errors raised while retrieving entities from the source system.
///
/// Retrieval failures are surfaced unchanged to the caller; there is no
/// retry and no partial-result suppression anywhere in this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdaptorError {
    /// Transport-level failure talking to the API.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("api error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// A response or dump file did not parse as the expected entity.
    #[error("json parse error: {0}")]
    Json(String),

    /// I/O failure reading a file-mode dump.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Required client configuration is absent.
    #[error("missing configuration: {0}")]
    MissingConfig(String),
}

impl From<reqwest::Error> for AdaptorError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AdaptorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, AdaptorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = AdaptorError::Api {
            status: 404,
            message: "study not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("study not found"));
    }
}
