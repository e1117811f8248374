//! Axum route handlers for the Question Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::InterviewQuestionSet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub position: String,
    pub candidate_id: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub position: String,
    pub candidate_id: String,
    pub questions: InterviewQuestionSet,
}

/// POST /api/v1/questions/generate
///
/// Looks up the job description and resume in the record stores, then runs
/// one generation call. A malformed model reply surfaces as an explicit
/// error response, not an empty set.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if request.position.trim().is_empty() {
        return Err(AppError::Validation("position cannot be empty".to_string()));
    }
    if request.candidate_id.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate_id cannot be empty".to_string(),
        ));
    }

    let job = state
        .jobs
        .job_by_position(&request.position)
        .ok_or_else(|| AppError::NotFound(format!("No job with position '{}'", request.position)))?;

    let candidate = state
        .candidates
        .candidate_by_id(&request.candidate_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("No candidate with id '{}'", request.candidate_id))
        })?;

    info!(
        "Generating interview questions for candidate {} against position '{}'",
        candidate.candidate_id, job.position
    );

    let questions = state
        .generator
        .generate(&job.jd_content, &candidate.resume_markdown)
        .await?;

    Ok(Json(GenerateQuestionsResponse {
        position: request.position,
        candidate_id: request.candidate_id,
        questions,
    }))
}
