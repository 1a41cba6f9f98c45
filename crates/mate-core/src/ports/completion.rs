//! Completion service port trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A single role-tagged message sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

impl PromptMessage {
    /// Create a system-level instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user-level message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Output shape requested from the completion service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseShape {
    /// Free text.
    #[default]
    Text,
    /// A single JSON object.
    JsonObject,
}

/// One completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model identifier understood by the service.
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub shape: ResponseShape,
}

impl CompletionRequest {
    /// Create a free-text request.
    pub fn new(model: impl Into<String>, messages: Vec<PromptMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            shape: ResponseShape::Text,
        }
    }

    /// Ask the service to answer with a single JSON object.
    #[must_use]
    pub const fn expect_json_object(mut self) -> Self {
        self.shape = ResponseShape::JsonObject;
        self
    }
}

/// Errors from completion port operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP, JSON)
/// are mapped to these at the adapter boundary.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The call did not finish within the configured timeout.
    #[error("Completion request timed out after {seconds}s")]
    Timeout {
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// The credential was rejected.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Message returned by the service
        message: String,
    },

    /// Rate limit or quota exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// Message returned by the service
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("Completion service returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message returned by the service
        message: String,
    },

    /// The service envelope was unreadable or carried no reply.
    #[error("Invalid completion response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client misconfiguration (bad base URL, unusable credential).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for completion port operations.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Port trait for a hosted text-completion service.
///
/// Implementations return the text content of the first reply choice. When
/// the request asked for [`ResponseShape::JsonObject`] that text is expected,
/// but not guaranteed, to be a JSON document; checking it is the caller's job.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Run a single completion and return the reply text.
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn CompletionPort>) {}

    #[test]
    fn test_message_role_serialises_lowercase() {
        let msg = PromptMessage::system("be brief");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be brief");
    }

    #[test]
    fn test_request_shape_defaults_to_text() {
        let req = CompletionRequest::new("gpt", vec![PromptMessage::user("hi")]);
        assert_eq!(req.shape, ResponseShape::Text);
        assert_eq!(req.expect_json_object().shape, ResponseShape::JsonObject);
    }

    #[test]
    fn test_error_display() {
        let err = CompletionError::Api {
            status: 500,
            message: "upstream exploded".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("upstream exploded"));

        let err = CompletionError::Timeout { seconds: 60 };
        assert!(err.to_string().contains("60s"));
    }
}
