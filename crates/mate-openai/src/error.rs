//! Internal error types for completion client operations.
//!
//! These errors are internal to `mate-openai` and are mapped to
//! `CompletionError` at the port boundary.

use thiserror::Error;

/// Result type alias for client operations.
pub type OpenAiResult<T> = Result<T, OpenAiError>;

/// Errors related to the Chat Completions API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// API request failed with an HTTP error status.
    #[error("Chat Completions request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or the raw body
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {seconds}s")]
    Timeout {
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// API returned an unexpected envelope.
    #[error("Invalid response from Chat Completions API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No credential was configured.
    #[error("No API key configured")]
    MissingApiKey,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = OpenAiError::ApiRequestFailed {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota"));
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let error: OpenAiError = parse_err.into();
        assert!(error.to_string().starts_with("Invalid URL"));
    }
}
