//! Wire types for the Chat Completions API.

use mate_core::{PromptMessage, ResponseShape};
use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionBody<'a> {
    pub model: &'a str,
    pub messages: &'a [PromptMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Structured-output directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    /// Directive for a requested output shape, if the shape needs one.
    pub const fn for_shape(shape: ResponseShape) -> Option<Self> {
        match shape {
            ResponseShape::Text => None,
            ResponseShape::JsonObject => Some(Self {
                kind: "json_object",
            }),
        }
    }
}

/// Non-streaming completion reply. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionReply {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope: `{"error": {"message": ..., "type": ..., "code": ...}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Best human-readable message from an error response body.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body).map_or_else(
        |_| body.trim().to_string(),
        |envelope| envelope.error.message,
    )
}
