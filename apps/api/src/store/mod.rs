//! Record Store — in-memory views over the two static JSON collections.
//!
//! Both stores load once at startup and are read-only afterwards, so they are
//! shared across handlers as plain `Arc`s with no locking.

use std::path::Path;

use thiserror::Error;

pub mod candidates;
pub mod handlers;
pub mod jobs;

pub use candidates::CandidateStore;
pub use jobs::JobStore;

/// A static data file could not be loaded. Fatal at startup — the stores are
/// never reloaded, so there is no partial or retry path.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn read_file(path: &Path) -> Result<String, DataLoadError> {
    std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })
}
