//! Mentor chat handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use mate_core::ChatRequest;

use crate::dto::ChatAnswer;
use crate::error::HttpError;
use crate::state::AppState;

/// Free-form chat with the mentor.
///
/// POST /api/chat
///
/// `step`, `formData` and `message` are all optional and default to
/// `1`, `{}` and `""`.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatAnswer>, HttpError> {
    let Json(req) = payload?;

    tracing::info!(step = req.step, "Mentor chat");

    let answer = state
        .mentor
        .chat_with_mentor(req.step, &req.form_data, &req.message)
        .await?;
    Ok(Json(ChatAnswer { answer }))
}
