//! HTTP backend abstraction for the Chat Completions API.
//!
//! The client is generic over this trait so tests can swap the network for
//! canned replies. External code should go through `CompletionPort`.

use crate::config::OpenAiClientConfig;
use crate::error::{OpenAiError, OpenAiResult};
use crate::models::error_message_from_body;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` and deserialise the success body.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> OpenAiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Sends the bearer credential on every request. A single attempt is made;
/// transport errors and non-success statuses are returned to the caller.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
    timeout_secs: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &OpenAiClientConfig) -> OpenAiResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenAiError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_key,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> OpenAiError {
        if err.is_timeout() {
            OpenAiError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            OpenAiError::Network(err)
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> OpenAiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(url.as_str())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = error_message_from_body(&String::from_utf8_lossy(&bytes));
            tracing::warn!(status = status.as_u16(), %message, "Chat Completions request failed");
            return Err(OpenAiError::ApiRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
