use crate::models::{Mentor, Student};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read data file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed records in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One immutable snapshot of both record collections
///
/// Snapshots are shared read-only across concurrent requests; a refresh
/// swaps in a new snapshot rather than mutating the current one.
#[derive(Debug)]
pub struct Dataset {
    pub students: Vec<Student>,
    pub mentors: Vec<Mentor>,
}

/// Data provider backed by two JSON files
///
/// Handles all access to the persisted dataset:
/// - Loading and validating student records
/// - Loading and validating mentor records
/// - Caching the parsed snapshot process-wide
pub struct DatasetStore {
    students_path: PathBuf,
    mentors_path: PathBuf,
    snapshot: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetStore {
    /// Create a new store for the given data file paths
    pub fn new(students_path: impl Into<PathBuf>, mentors_path: impl Into<PathBuf>) -> Self {
        Self {
            students_path: students_path.into(),
            mentors_path: mentors_path.into(),
            snapshot: RwLock::new(None),
        }
    }

    /// Get the current dataset snapshot, reading from disk on first use
    pub async fn load(&self) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(dataset) = self.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        self.refresh().await
    }

    /// Re-read both data files and replace the cached snapshot
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<Dataset>, DatasetError> {
        let students = read_records::<Student>(&self.students_path).await?;
        let mentors = read_records::<Mentor>(&self.mentors_path).await?;

        tracing::debug!(
            "Loaded dataset: {} students, {} mentors",
            students.len(),
            mentors.len()
        );

        let dataset = Arc::new(Dataset { students, mentors });
        *self.snapshot.write().await = Some(Arc::clone(&dataset));

        Ok(dataset)
    }
}

/// Read and validate one record collection
///
/// Typed deserialization is the single validation step: a record missing a
/// required attribute fails the whole load instead of surfacing later
/// during scoring.
async fn read_records<T>(path: &Path) -> Result<Vec<T>, DatasetError>
where
    T: serde::de::DeserializeOwned,
{
    let bytes = tokio::fs::read(path).await.map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
