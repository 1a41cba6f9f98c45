//! Planning handlers - phase verification, simulation, guided questions.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use mate_core::{
    ProjectSubmission, QuestionList, QuestionRequest, SimulationResult, VerificationResult,
    split_phase1,
};

use crate::error::HttpError;
use crate::state::AppState;

/// Score the step-1 and step-2 answers.
///
/// POST /api/verify-phase1
pub async fn verify_phase1(
    State(state): State<AppState>,
    payload: Result<Json<ProjectSubmission>, JsonRejection>,
) -> Result<Json<VerificationResult>, HttpError> {
    let Json(submission) = payload?;
    let (step1, step2) = split_phase1(&submission.form_data);

    tracing::info!(
        current_step = submission.current_step,
        step1_fields = step1.len(),
        step2_fields = step2.len(),
        "Verifying phase 1"
    );

    Ok(Json(state.mentor.verify_phase1(&step1, &step2).await?))
}

/// Simulate the business model over the whole form.
///
/// POST /api/simulate
pub async fn simulate(
    State(state): State<AppState>,
    payload: Result<Json<ProjectSubmission>, JsonRejection>,
) -> Result<Json<SimulationResult>, HttpError> {
    let Json(submission) = payload?;

    tracing::info!(
        current_step = submission.current_step,
        fields = submission.form_data.len(),
        "Simulating business model"
    );

    Ok(Json(
        state
            .mentor
            .simulate_business_model(&submission.form_data)
            .await?,
    ))
}

/// Follow-up questions for the next form field.
///
/// POST /api/guided-questions
pub async fn guided_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionList>, HttpError> {
    let Json(req) = payload?;

    tracing::info!(field = %req.field_id, next = %req.next_label, "Generating guided questions");

    let questions = state
        .mentor
        .guided_questions(&req.field_id, &req.next_label, &req.form_data)
        .await?;
    Ok(Json(QuestionList { questions }))
}
