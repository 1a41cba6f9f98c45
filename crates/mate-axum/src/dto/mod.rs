//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! Response envelopes that exist only on the wire. Results that are domain
//! types (`VerificationResult`, `SimulationResult`, `QuestionList`) are
//! serialised directly from `mate-core`.

use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}
