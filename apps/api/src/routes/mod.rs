pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/jobs", get(store_handlers::handle_list_positions))
        .route("/api/v1/jobs/:position", get(store_handlers::handle_get_job))
        .route(
            "/api/v1/candidates",
            get(store_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(store_handlers::handle_get_candidate),
        )
        // Search API
        .route(
            "/api/v1/search/candidates",
            get(search_handlers::handle_keyword_search),
        )
        .route(
            "/api/v1/search/ranking/:jd_id",
            get(search_handlers::handle_job_ranking),
        )
        // Question Generation API
        .route(
            "/api/v1/questions/generate",
            post(generation_handlers::handle_generate_questions),
        )
        .with_state(state)
}
