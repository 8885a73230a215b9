use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recruiter-driven pipeline stage of an application.
/// Serialized capitalized, matching the records the old client wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Selected,
    Rejected,
}

/// One student's application to one drive, as persisted in
/// `applications.json`. At most one per (student, drive) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub student_id: String,
    pub drive_id: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
