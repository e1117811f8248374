//! Axum route handlers for the job and candidate catalogs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRecord, CandidateSummary};
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PositionsResponse {
    pub positions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<CandidateSummary>,
}

/// GET /api/v1/jobs
///
/// All job positions in file order, for the position picker.
pub async fn handle_list_positions(State(state): State<AppState>) -> Json<PositionsResponse> {
    let positions = state
        .jobs
        .positions()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(PositionsResponse { positions })
}

/// GET /api/v1/jobs/:position
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    let job = state
        .jobs
        .job_by_position(&position)
        .ok_or_else(|| AppError::NotFound(format!("No job with position '{position}'")))?;
    Ok(Json(job.clone()))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<CandidatesResponse> {
    Json(CandidatesResponse {
        candidates: state.candidates.candidates(),
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<CandidateRecord>, AppError> {
    let candidate = state
        .candidates
        .candidate_by_id(&candidate_id)
        .ok_or_else(|| AppError::NotFound(format!("No candidate with id '{candidate_id}'")))?;
    Ok(Json(candidate.clone()))
}
