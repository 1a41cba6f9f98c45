//! Port trait implementation for `OpenAiClient`.
//!
//! Converts internal client errors into core `CompletionError`s.

use async_trait::async_trait;
use mate_core::ports::{CompletionError, CompletionPort, CompletionRequest, CompletionResult};

use crate::client::OpenAiClient;
use crate::error::OpenAiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `OpenAiError` to core `CompletionError`.
pub(crate) fn map_error(err: OpenAiError) -> CompletionError {
    match err {
        OpenAiError::ApiRequestFailed { status, message } => match status {
            401 | 403 => CompletionError::Authentication { message },
            429 => CompletionError::RateLimited { message },
            _ => CompletionError::Api { status, message },
        },
        OpenAiError::Timeout { seconds } => CompletionError::Timeout { seconds },
        OpenAiError::InvalidResponse { message } => CompletionError::InvalidResponse { message },
        OpenAiError::JsonParse(e) => CompletionError::InvalidResponse {
            message: e.to_string(),
        },
        OpenAiError::Network(e) => CompletionError::Network {
            message: e.to_string(),
        },
        OpenAiError::MissingApiKey => CompletionError::Configuration {
            message: "no API key configured (set OPENAI_API_KEY)".to_string(),
        },
        OpenAiError::InvalidUrl(e) => CompletionError::Configuration {
            message: format!("invalid base URL: {e}"),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CompletionPort for OpenAiClient<B> {
    async fn complete(&self, request: CompletionRequest) -> CompletionResult<String> {
        self.chat_completion(&request).await.map_err(map_error)
    }
}
