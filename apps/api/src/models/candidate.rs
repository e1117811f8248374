use serde::{Deserialize, Serialize};

/// One candidate profile from the static candidate data file.
/// `resume_markdown` is the full CV text fed to question generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename(deserialize = "Candidate_ID"))]
    pub candidate_id: String,
    #[serde(rename(deserialize = "candidate_name"))]
    pub name: String,
    #[serde(rename(deserialize = "File_Name"))]
    pub file_name: String,
    #[serde(rename(deserialize = "MD_Content"))]
    pub resume_markdown: String,
}

/// Listing row for the candidate picker — everything except the resume body.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub candidate_id: String,
    pub name: String,
    pub file_name: String,
}

impl From<&CandidateRecord> for CandidateSummary {
    fn from(record: &CandidateRecord) -> Self {
        CandidateSummary {
            candidate_id: record.candidate_id.clone(),
            name: record.name.clone(),
            file_name: record.file_name.clone(),
        }
    }
}
