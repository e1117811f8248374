use std::path::Path;

use tracing::info;

use crate::models::candidate::{CandidateRecord, CandidateSummary};
use crate::store::{read_file, DataLoadError};

/// In-memory view over the candidate profile file, in file order.
#[derive(Debug)]
pub struct CandidateStore {
    candidates: Vec<CandidateRecord>,
}

impl CandidateStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let raw = read_file(path)?;
        let candidates: Vec<CandidateRecord> =
            serde_json::from_str(&raw).map_err(|source| DataLoadError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            "Loaded {} candidate records from {}",
            candidates.len(),
            path.display()
        );
        Ok(CandidateStore { candidates })
    }

    /// Listing rows for the candidate picker, in file order.
    pub fn candidates(&self) -> Vec<CandidateSummary> {
        self.candidates.iter().map(CandidateSummary::from).collect()
    }

    /// Record for the given candidate id, or `None` when the id is unknown.
    pub fn candidate_by_id(&self, candidate_id: &str) -> Option<&CandidateRecord> {
        self.candidates
            .iter()
            .find(|candidate| candidate.candidate_id == candidate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CANDIDATES_JSON: &str = r##"[
        {"Candidate_ID": "5d58705c-38ef-47a1-bad3-d30f940319fc",
         "candidate_name": "Jane Doe", "File_Name": "jane.pdf",
         "MD_Content": "# Jane Doe"},
        {"Candidate_ID": "7e69816d-49f0-58b2-cbe4-e41fa51420fd",
         "candidate_name": "John Roe", "File_Name": "john.pdf",
         "MD_Content": "# John Roe"}
    ]"##;

    fn store() -> (tempfile::NamedTempFile, CandidateStore) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CANDIDATES_JSON.as_bytes()).unwrap();
        let store = CandidateStore::load(file.path()).unwrap();
        (file, store)
    }

    #[test]
    fn test_candidates_listing_preserves_file_order() {
        let (_file, store) = store();
        let listing = store.candidates();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].name, "Jane Doe");
        assert_eq!(listing[1].candidate_id, "7e69816d-49f0-58b2-cbe4-e41fa51420fd");
    }

    #[test]
    fn test_lookup_by_id() {
        let (_file, store) = store();
        let record = store
            .candidate_by_id("5d58705c-38ef-47a1-bad3-d30f940319fc")
            .unwrap();
        assert_eq!(record.resume_markdown, "# Jane Doe");
    }

    #[test]
    fn test_unknown_id_returns_none_not_error() {
        let (_file, store) = store();
        assert!(store.candidate_by_id("no-such-id").is_none());
    }
}
