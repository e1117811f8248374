//! Search Gateway — the single point of entry for the hosted candidate index.
//!
//! Both operations are pure passthroughs: the index owns ranking, scoring,
//! and pagination; this module only shapes the request and relays the rows.
//! Nothing is cached, re-ranked, or retried here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;

pub mod handlers;

const SEARCH_API_VERSION: &str = "2023-11-01";

/// Fields returned for plain keyword searches.
const KEYWORD_SELECT: &str = "Candidate_ID, candidate_name, candidate_summary";
/// Fields returned for per-job ranking, including the index's scoring columns.
const RANKING_SELECT: &str = "Candidate_ID, JD_ID, candidate_name, candidate_summary, \
    SemanticScore, EducationGrade, ExperienceGrade, OverallScore";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One row relayed from the index. The scoring columns are only present on
/// ranking queries — keyword searches select the narrow field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename(deserialize = "Candidate_ID"))]
    pub candidate_id: String,
    #[serde(rename(deserialize = "JD_ID"), default)]
    pub jd_id: Option<String>,
    #[serde(rename(deserialize = "candidate_name"))]
    pub name: String,
    #[serde(rename(deserialize = "candidate_summary"))]
    pub summary: String,
    #[serde(rename(deserialize = "@search.score"))]
    pub search_score: f64,
    #[serde(rename(deserialize = "SemanticScore"), default)]
    pub semantic_score: Option<f64>,
    #[serde(rename(deserialize = "EducationGrade"), default)]
    pub education_grade: Option<String>,
    #[serde(rename(deserialize = "ExperienceGrade"), default)]
    pub experience_grade: Option<String>,
    #[serde(rename(deserialize = "OverallScore"), default)]
    pub overall_score: Option<f64>,
}

/// Search results plus the index's total count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: u64,
    pub results: Vec<SearchHit>,
}

/// Request body for the index's `docs/search` POST endpoint.
#[derive(Debug, Serialize, PartialEq)]
struct SearchRequest {
    search: String,
    #[serde(rename = "queryType")]
    query_type: &'static str,
    #[serde(rename = "searchFields")]
    search_fields: &'static str,
    select: &'static str,
    count: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(rename = "orderby", skip_serializing_if = "Option::is_none")]
    order_by: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "@odata.count", default)]
    count: Option<u64>,
    value: Vec<SearchHit>,
}

/// Client for the hosted candidate index.
#[derive(Clone)]
pub struct SearchGateway {
    client: Client,
    endpoint: String,
    index: String,
    api_key: String,
    /// Optional JD_ID scope for keyword searches (legacy behavior made
    /// configurable; unset means unscoped).
    keyword_jd_filter: Option<String>,
}

impl SearchGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: config.search_endpoint.trim_end_matches('/').to_string(),
            index: config.search_index.clone(),
            api_key: config.search_api_key.clone(),
            keyword_jd_filter: config.keyword_jd_filter.clone(),
        }
    }

    /// Free-text search over the resume field. Returns the narrow row shape
    /// (name, summary, text score only).
    pub async fn search_by_keyword(&self, term: &str) -> Result<SearchResults, SearchError> {
        let request = keyword_request(term, self.keyword_jd_filter.as_deref());
        self.run(request).await
    }

    /// All candidates indexed against one job description, ordered by the
    /// index's descending overall score, with every scoring column selected.
    pub async fn search_by_job_id(&self, jd_id: Uuid) -> Result<SearchResults, SearchError> {
        let request = ranking_request(jd_id);
        self.run(request).await
    }

    async fn run(&self, request: SearchRequest) -> Result<SearchResults, SearchError> {
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index, SEARCH_API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        debug!(
            "Search returned {} rows (total count {:?})",
            parsed.value.len(),
            parsed.count
        );

        Ok(SearchResults {
            count: parsed.count.unwrap_or(parsed.value.len() as u64),
            results: parsed.value,
        })
    }
}

fn keyword_request(term: &str, jd_filter: Option<&str>) -> SearchRequest {
    SearchRequest {
        search: term.to_string(),
        query_type: "simple",
        search_fields: "CV",
        select: KEYWORD_SELECT,
        count: true,
        filter: jd_filter.map(|jd_id| format!("JD_ID eq '{jd_id}'")),
        order_by: None,
    }
}

fn ranking_request(jd_id: Uuid) -> SearchRequest {
    SearchRequest {
        search: "*".to_string(),
        query_type: "simple",
        search_fields: "CV",
        select: RANKING_SELECT,
        count: true,
        filter: Some(format!("JD_ID eq '{jd_id}'")),
        order_by: Some("OverallScore desc"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_ID: &str = "f4885285-acc3-43d0-837a-9adf436ec777";

    #[test]
    fn test_keyword_request_shape() {
        let request = keyword_request("python pandas", None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["search"], "python pandas");
        assert_eq!(value["queryType"], "simple");
        assert_eq!(value["searchFields"], "CV");
        assert_eq!(value["count"], true);
        assert!(value.get("filter").is_none());
        assert!(value.get("orderby").is_none());
    }

    #[test]
    fn test_keyword_request_with_configured_scope() {
        let request = keyword_request("sales", Some(JD_ID));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["filter"], format!("JD_ID eq '{JD_ID}'"));
    }

    #[test]
    fn test_ranking_request_filters_and_orders() {
        let request = ranking_request(JD_ID.parse().unwrap());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["search"], "*");
        assert_eq!(value["filter"], format!("JD_ID eq '{JD_ID}'"));
        assert_eq!(value["orderby"], "OverallScore desc");
        let select = value["select"].as_str().unwrap();
        for field in ["SemanticScore", "EducationGrade", "ExperienceGrade", "OverallScore"] {
            assert!(select.contains(field), "select missing {field}");
        }
    }

    #[test]
    fn test_hit_deserializes_from_index_row() {
        let json = format!(
            r#"{{
                "@search.score": 4.37,
                "Candidate_ID": "5d58705c-38ef-47a1-bad3-d30f940319fc",
                "JD_ID": "{JD_ID}",
                "candidate_name": "Jane Doe",
                "candidate_summary": "Seasoned sales professional",
                "SemanticScore": 0.91,
                "EducationGrade": "A",
                "ExperienceGrade": "B",
                "OverallScore": 87.0
            }}"#
        );
        let hit: SearchHit = serde_json::from_str(&json).unwrap();
        assert_eq!(hit.jd_id.as_deref(), Some(JD_ID));
        assert!((hit.search_score - 4.37).abs() < f64::EPSILON);
        assert_eq!(hit.overall_score, Some(87.0));
        assert_eq!(hit.education_grade.as_deref(), Some("A"));
    }

    #[test]
    fn test_hit_tolerates_narrow_keyword_select() {
        let json = r#"{
            "@search.score": 1.2,
            "Candidate_ID": "id-1",
            "candidate_name": "John Roe",
            "candidate_summary": "Analyst"
        }"#;
        let hit: SearchHit = serde_json::from_str(json).unwrap();
        assert!(hit.jd_id.is_none());
        assert!(hit.semantic_score.is_none());
        assert!(hit.overall_score.is_none());
    }

    #[test]
    fn test_response_count_falls_back_to_row_count() {
        let json = r#"{"value": [
            {"@search.score": 1.0, "Candidate_ID": "a",
             "candidate_name": "A", "candidate_summary": "s"}
        ]}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.count.is_none());
        assert_eq!(parsed.value.len(), 1);
    }
}
