mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod search;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::QuestionGenerator;
use crate::llm_client::AzureOpenAiClient;
use crate::routes::build_router;
use crate::search::SearchGateway;
use crate::state::AppState;
use crate::store::{CandidateStore, JobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireLens API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static record stores (read-only for the process lifetime)
    let jobs = Arc::new(JobStore::load(&config.job_data_path)?);
    let candidates = Arc::new(CandidateStore::load(&config.candidate_data_path)?);

    // Initialize the search gateway
    let search = SearchGateway::new(&config);
    info!("Search gateway initialized (index: {})", config.search_index);

    // Initialize the LLM client and question generator
    let llm = AzureOpenAiClient::new(&config);
    info!(
        "LLM client initialized (deployment: {}, api-version: {})",
        llm.deployment(),
        llm_client::OPENAI_API_VERSION
    );
    let generator = Arc::new(QuestionGenerator::new(
        Arc::new(llm),
        config.cv_max_tokens,
        config.jd_max_tokens,
    )?);

    // Build app state
    let state = AppState {
        jobs,
        candidates,
        search,
        generator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
