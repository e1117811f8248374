use std::path::Path;

use tracing::info;

use crate::models::job::{JobFile, JobRecord};
use crate::store::{read_file, DataLoadError};

/// In-memory view over the job description file, in file order.
#[derive(Debug)]
pub struct JobStore {
    jobs: Vec<JobRecord>,
}

impl JobStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let raw = read_file(path)?;
        let file: JobFile = serde_json::from_str(&raw).map_err(|source| DataLoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        info!("Loaded {} job records from {}", file.list.len(), path.display());
        Ok(JobStore { jobs: file.list })
    }

    /// All positions in file order. Duplicates are neither removed nor
    /// introduced — the list mirrors the file exactly.
    pub fn positions(&self) -> Vec<&str> {
        self.jobs.iter().map(|job| job.position.as_str()).collect()
    }

    /// First record whose position matches, or `None` when no such position
    /// exists. An absent key is not an error.
    pub fn job_by_position(&self, position: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.position == position)
    }
}
