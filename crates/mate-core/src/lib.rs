#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod prompts;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ChatRequest, FormData, ProjectSubmission, QuestionList, QuestionRequest,
    STEP1_PREFIX, STEP2_PREFIX, SimulationResult, VerificationResult, fields_with_prefix,
    split_phase1,
};
pub use ports::{
    CompletionError, CompletionPort, CompletionRequest, MessageRole, PromptMessage, ResponseShape,
};
pub use services::{AdapterError, DEFAULT_MODEL, MentorService};

// Dev-dependencies used only by unit tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
