//! Errors raised by the mentoring adapter.

use thiserror::Error;

use crate::ports::CompletionError;

/// Failure of a single mentoring operation.
///
/// Adapters map each kind to their own representation; the HTTP adapter
/// gives upstream failures and contract violations distinct statuses.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The completion call itself failed.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] CompletionError),

    /// The reply was not a JSON document.
    #[error("Upstream reply is not valid JSON: {0}")]
    MalformedResponse(String),

    /// The reply was JSON but not the requested shape.
    #[error("Upstream reply does not match the expected shape: {0}")]
    ContractViolation(String),

    /// The caller's form could not be serialised into the prompt.
    #[error("Failed to encode form data: {0}")]
    Encoding(String),
}
