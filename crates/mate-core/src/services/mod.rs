//! Core services.

mod error;
mod mentor;

pub use error::AdapterError;
pub use mentor::{DEFAULT_MODEL, MentorService};
