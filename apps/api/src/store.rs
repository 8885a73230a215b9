//! Flat-file JSON persistence.
//!
//! Each collection is a single JSON array file under the data directory,
//! read and rewritten whole per request. There is no cache and no lock:
//! the system runs as one local process and last write wins.

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::application::Application;
use crate::models::drive::Drive;
use crate::models::student::Student;

const STUDENTS_FILE: &str = "students.json";
const DRIVES_FILE: &str = "drives.json";
const APPLICATIONS_FILE: &str = "applications.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Handle to the data directory holding the three collection files.
/// Cheap to clone; carried in `AppState`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub async fn load_students(&self) -> Result<Vec<Student>, StoreError> {
        self.load(STUDENTS_FILE).await
    }

    pub async fn save_students(&self, students: &[Student]) -> Result<(), StoreError> {
        self.save(STUDENTS_FILE, students).await
    }

    /// Replaces the record with a matching id, or appends a new one.
    pub async fn upsert_student(&self, student: Student) -> Result<Student, StoreError> {
        let mut students = self.load_students().await?;
        match students.iter_mut().find(|s| s.id == student.id) {
            Some(existing) => *existing = student.clone(),
            None => students.push(student.clone()),
        }
        self.save_students(&students).await?;
        Ok(student)
    }

    pub async fn load_drives(&self) -> Result<Vec<Drive>, StoreError> {
        self.load(DRIVES_FILE).await
    }

    pub async fn save_drives(&self, drives: &[Drive]) -> Result<(), StoreError> {
        self.save(DRIVES_FILE, drives).await
    }

    pub async fn load_applications(&self) -> Result<Vec<Application>, StoreError> {
        self.load(APPLICATIONS_FILE).await
    }

    pub async fn save_applications(&self, applications: &[Application]) -> Result<(), StoreError> {
        self.save(APPLICATIONS_FILE, applications).await
    }

    /// Reads a whole collection. A file that does not exist yet is an empty
    /// collection, not an error; a file that exists but does not parse is.
    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Rewrites a whole collection, creating the data directory on demand.
    /// Pretty-printed, the same 2-space shape the old client produced.
    async fn save<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let path = self.data_dir.join(file);
        let bytes = serde_json::to_vec_pretty(items)?;
        tokio::fs::write(&path, bytes).await?;
        debug!("wrote {} records to {}", items.len(), path.display());
        Ok(())
    }
}
