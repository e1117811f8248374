use serde::{Deserialize, Serialize};

/// One job description record from the static job data file.
/// Immutable once loaded; `position` is the lookup key, `jd_id` correlates
/// with rows in the external search index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename(deserialize = "Position"))]
    pub position: String,
    #[serde(rename(deserialize = "Experience"))]
    pub required_experience: String,
    #[serde(rename(deserialize = "JD_ID"))]
    pub jd_id: String,
    #[serde(rename(deserialize = "JD_Content"))]
    pub jd_content: String,
}

/// File shape: `{ "List": [ {Position, Experience, JD_ID, JD_Content, ...} ] }`.
#[derive(Debug, Deserialize)]
pub struct JobFile {
    #[serde(rename = "List")]
    pub list: Vec<JobRecord>,
}
