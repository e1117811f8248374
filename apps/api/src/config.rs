use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Constructed once in `main` and injected into the search gateway and
/// question generator — never read again as ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_endpoint: String,
    pub search_api_key: String,
    pub search_index: String,
    pub openai_endpoint: String,
    pub openai_api_key: String,
    pub openai_deployment: String,
    pub job_data_path: String,
    pub candidate_data_path: String,
    pub cv_max_tokens: usize,
    pub jd_max_tokens: usize,
    /// Optional JD_ID scope applied to keyword searches. The legacy system
    /// hard-coded one job id here; absent means keyword search is unscoped.
    pub keyword_jd_filter: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            search_endpoint: require_env("SEARCH_ENDPOINT")?,
            search_api_key: require_env("SEARCH_API_KEY")?,
            search_index: env_or("SEARCH_INDEX", "hr-index"),
            openai_endpoint: require_env("OPENAI_ENDPOINT")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_deployment: env_or("OPENAI_DEPLOYMENT", "hrgpt"),
            job_data_path: env_or("JOB_DATA_PATH", "data/jd_data.json"),
            candidate_data_path: env_or("CANDIDATE_DATA_PATH", "data/candidate_record_list.json"),
            cv_max_tokens: env_or("CV_MAX_TOKENS", "2700")
                .parse::<usize>()
                .context("CV_MAX_TOKENS must be a positive integer")?,
            jd_max_tokens: env_or("JD_MAX_TOKENS", "2700")
                .parse::<usize>()
                .context("JD_MAX_TOKENS must be a positive integer")?,
            keyword_jd_filter: std::env::var("SEARCH_KEYWORD_JD_FILTER").ok(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
