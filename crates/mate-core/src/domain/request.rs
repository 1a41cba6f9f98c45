//! Caller payloads for the mentoring operations.
//!
//! Field names follow the front end's camelCase wire format.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::form::FormData;

/// Form snapshot submitted for phase verification or simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    /// All form answers collected so far.
    pub form_data: FormData,
    /// Workflow step the caller is currently on.
    pub current_step: i64,
}

/// Request for follow-up questions between two form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    /// Label of the field the user just completed.
    pub field_id: String,
    /// Label of the field the user fills in next.
    pub next_label: String,
    pub form_data: FormData,
}

const fn default_chat_step() -> i64 {
    1
}

/// `null` deserialises to the type's default, like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_step<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(default_chat_step))
}

/// Free-form mentor chat message.
///
/// Every field is optional on the wire, and an explicit `null` counts as
/// absent. `formData` accepts any JSON object because chat context is
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default = "default_chat_step", deserialize_with = "null_as_default_step")]
    pub step: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_data: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            step: default_chat_step(),
            form_data: Map::new(),
            message: String::new(),
        }
    }
}
