//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `MentorService`.
//!
//! Bodies are taken as `Result<Json<T>, JsonRejection>` so a malformed body
//! becomes an `HttpError::BadRequest` with the standard JSON error body
//! rather than axum's plain-text rejection.

pub mod chat;
pub mod planning;
pub mod system;
