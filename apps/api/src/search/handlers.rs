//! Axum route handlers for the Search Gateway.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::search::SearchResults;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub q: String,
}

/// GET /api/v1/search/candidates?q=term
///
/// Free-text search over indexed resumes. An empty result set is a valid
/// response, not an error.
pub async fn handle_keyword_search(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<SearchResults>, AppError> {
    if query.q.trim().is_empty() {
        return Err(AppError::Validation("q cannot be empty".to_string()));
    }

    let results = state.search.search_by_keyword(&query.q).await?;
    Ok(Json(results))
}

/// GET /api/v1/search/ranking/:jd_id
///
/// Ranked candidates for one job description. The jd_id must be a UUID —
/// it is interpolated into an index filter expression, so anything else is
/// rejected before any network call.
pub async fn handle_job_ranking(
    State(state): State<AppState>,
    Path(jd_id): Path<String>,
) -> Result<Json<SearchResults>, AppError> {
    let jd_id: Uuid = jd_id
        .parse()
        .map_err(|_| AppError::Validation(format!("'{jd_id}' is not a valid job id")))?;

    let results = state.search.search_by_job_id(jd_id).await?;
    Ok(Json(results))
}
