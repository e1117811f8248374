//! Question Generation — builds the interview-prep prompt, forces a
//! structured tool call against the hosted model, and validates the result.

use thiserror::Error;

use crate::llm_client::LlmError;

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod truncate;

pub use generator::QuestionGenerator;
pub use questions::{GenerationParseError, InterviewQuestionSet};

/// A generation attempt failed. There is no retry — a single failed or
/// malformed call yields no question set for that request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] GenerationParseError),
}
