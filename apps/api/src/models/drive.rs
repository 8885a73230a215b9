use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a drive requires of an applicant.
///
/// `required_skills` is informational only: it feeds the suggestions prompt
/// and the drive listing, but eligibility never enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveCriteria {
    pub min_cgpa: f64,
    pub max_backlogs: u32,
    pub allowed_branches: Vec<String>,
    pub required_skills: Vec<String>,
}

/// A company's recruitment posting as persisted in `drives.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drive {
    pub id: String,
    /// Company name, e.g. "Infosys".
    pub name: String,
    /// Job role, e.g. "Power Programmer".
    pub role: String,
    /// Free-text pay string, e.g. "9 LPA".
    pub package: String,
    pub criteria: DriveCriteria,
    /// Absent on drives imported from files the old client wrote.
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_drive_without_created_at() {
        let drive: Drive = serde_json::from_value(json!({
            "id": "1",
            "name": "Google",
            "role": "Software Engineer",
            "package": "30 LPA",
            "criteria": {
                "min_cgpa": 8.5,
                "allowed_branches": ["CSE", "IT"],
                "max_backlogs": 0,
                "required_skills": ["Algorithms", "Data Structures", "Python"]
            }
        }))
        .unwrap();

        assert_eq!(drive.criteria.min_cgpa, 8.5);
        assert_eq!(drive.criteria.allowed_branches, vec!["CSE", "IT"]);
        assert_eq!(drive.created_at, None);
    }

    #[test]
    fn test_criteria_rejects_negative_backlog_threshold() {
        let result: Result<DriveCriteria, _> = serde_json::from_value(json!({
            "min_cgpa": 7.0,
            "max_backlogs": -1,
            "allowed_branches": [],
            "required_skills": []
        }));
        assert!(result.is_err());
    }
}
