//! Domain types for the mentoring workflow.
//!
//! Everything here is request-scoped: built at request entry, dropped at
//! response exit. Nothing is persisted.

pub mod form;
pub mod request;
pub mod result;

pub use form::{FormData, STEP1_PREFIX, STEP2_PREFIX, fields_with_prefix, split_phase1};
pub use request::{ChatRequest, ProjectSubmission, QuestionRequest};
pub use result::{QuestionList, SimulationResult, VerificationResult};
