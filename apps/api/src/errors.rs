use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::{GenerationError, GenerationParseError};
use crate::search::SearchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Search unavailable: {0}")]
    SearchUnavailable(#[from] SearchError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::SearchUnavailable(e) => {
                tracing::error!("Search error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SEARCH_UNAVAILABLE",
                    "The candidate search service could not be reached".to_string(),
                )
            }
            AppError::Generation(GenerationError::Parse(e)) => {
                tracing::error!("Generation parse error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_PARSE_ERROR",
                    format!("The model returned an unusable question set: {e}"),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<GenerationParseError> for AppError {
    fn from(e: GenerationParseError) -> Self {
        AppError::Generation(GenerationError::Parse(e))
    }
}
