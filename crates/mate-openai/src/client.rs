//! Chat Completions client.

use mate_core::CompletionRequest;
use url::Url;

use crate::config::OpenAiClientConfig;
use crate::error::{OpenAiError, OpenAiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ChatCompletionBody, ChatCompletionReply, ResponseFormat};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultOpenAiClient = OpenAiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for an OpenAI-compatible Chat Completions endpoint.
///
/// Generic over an HTTP backend so it can be tested without a network. Use
/// `DefaultOpenAiClient` in production code.
pub struct OpenAiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) completions_url: Url,
}

impl DefaultOpenAiClient {
    /// Create a client from configuration.
    ///
    /// Fails when no API key is configured or the base URL does not parse.
    pub fn new(config: &OpenAiClientConfig) -> mate_core::ports::CompletionResult<Self> {
        Self::build(config).map_err(crate::port::map_error)
    }

    fn build(config: &OpenAiClientConfig) -> OpenAiResult<Self> {
        let completions_url = completions_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            completions_url,
        })
    }
}

impl<B: HttpBackend> OpenAiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> Self {
        Self {
            backend,
            completions_url: completions_url(base_url).expect("test base URL is valid"),
        }
    }

    /// Endpoint every request is posted to.
    pub const fn completions_url(&self) -> &Url {
        &self.completions_url
    }

    /// Run one completion and return the text of the first choice.
    pub(crate) async fn chat_completion(&self, request: &CompletionRequest) -> OpenAiResult<String> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            response_format: ResponseFormat::for_shape(request.shape),
        };

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            shape = ?request.shape,
            "Posting chat completion"
        );

        let reply: ChatCompletionReply =
            self.backend.post_json(&self.completions_url, &body).await?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAiError::InvalidResponse {
                message: "reply contained no choices".to_string(),
            })?;

        tracing::debug!(finish_reason = ?choice.finish_reason, "Chat completion finished");

        choice
            .message
            .content
            .ok_or_else(|| OpenAiError::InvalidResponse {
                message: "first choice has no text content".to_string(),
            })
    }
}

/// Append `/chat/completions` to the API root.
fn completions_url(base_url: &str) -> OpenAiResult<Url> {
    let root = base_url.trim_end_matches('/');
    Ok(Url::parse(&format!("{root}/chat/completions"))?)
}
