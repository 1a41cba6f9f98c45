//! Typed results produced by the completion service.
//!
//! The model is asked for a specific JSON shape. These types are the shape
//! we accept: a reply that does not deserialise into them is a contract
//! violation. Extra keys the model adds are kept in `extra` and passed
//! through untouched, and `score` keeps its original JSON number form so a
//! conforming reply serialises back byte-for-byte equivalent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Business-viability verdict for steps 1 and 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub score: Number,
    pub passed: bool,
    pub feedback: String,
    pub suggestions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Business-model simulation over the full form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub score: Number,
    pub status: String,
    /// Business-model canvas, free-form object.
    pub bm: Map<String, Value>,
    /// Simulated figures, free-form object.
    pub simulation: Map<String, Value>,
    pub risk_factor: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Guided follow-up questions.
///
/// A missing `questions` key means "no questions", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionList {
    #[serde(default)]
    pub questions: Vec<String>,
}
