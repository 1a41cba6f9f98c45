//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type and the mapping from
//! `AdapterError` to status codes and response bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mate_core::{AdapterError, CompletionError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
///
/// Caller mistakes, upstream failures and internal faults each get their
/// own status so clients can tell them apart.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed or wrongly typed body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Completion service unreachable or answered with an error.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Completion service rejected our credential.
    #[error("Upstream authentication failed: {0}")]
    UpstreamAuth(String),

    /// Completion service replied with something other than the requested shape.
    #[error("Upstream contract violation: {0}")]
    UpstreamContract(String),

    /// Completion service rate limit or quota exhausted.
    #[error("Upstream rate limited: {0}")]
    UpstreamRateLimited(String),

    /// Completion service did not answer in time.
    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable(_) | Self::UpstreamAuth(_) | Self::UpstreamContract(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::UpstreamRateLimited(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "INVALID_REQUEST",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamAuth(_) => "UPSTREAM_AUTH",
            Self::UpstreamContract(_) => "UPSTREAM_CONTRACT_VIOLATION",
            Self::UpstreamRateLimited(_) => "UPSTREAM_RATE_LIMITED",
            Self::UpstreamTimeout(_) => "UPSTREAM_TIMEOUT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn detail(self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::UpstreamUnavailable(msg)
            | Self::UpstreamAuth(msg)
            | Self::UpstreamContract(msg)
            | Self::UpstreamRateLimited(msg)
            | Self::UpstreamTimeout(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    detail: String,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_type = self.error_type();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error_type, %detail, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error_type, %detail, "Request rejected");
        }

        let body = ErrorBody {
            status: status.as_u16(),
            detail,
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<AdapterError> for HttpError {
    fn from(err: AdapterError) -> Self {
        let detail = err.to_string();
        match err {
            AdapterError::Upstream(upstream) => match upstream {
                CompletionError::Authentication { .. } => Self::UpstreamAuth(detail),
                CompletionError::RateLimited { .. } => Self::UpstreamRateLimited(detail),
                CompletionError::Timeout { .. } => Self::UpstreamTimeout(detail),
                CompletionError::InvalidResponse { .. } => Self::UpstreamContract(detail),
                CompletionError::Configuration { .. } => Self::Internal(detail),
                CompletionError::Network { .. } | CompletionError::Api { .. } => {
                    Self::UpstreamUnavailable(detail)
                }
            },
            AdapterError::MalformedResponse(_) | AdapterError::ContractViolation(_) => {
                Self::UpstreamContract(detail)
            }
            AdapterError::Encoding(_) => Self::Internal(detail),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
