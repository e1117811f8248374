use std::sync::Arc;

use crate::config::Config;
use crate::generation::QuestionGenerator;
use crate::search::SearchGateway;
use crate::store::{CandidateStore, JobStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// The stores are loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobStore>,
    pub candidates: Arc<CandidateStore>,
    pub search: SearchGateway,
    pub generator: Arc<QuestionGenerator>,
    pub config: Config,
}
