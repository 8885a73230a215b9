use serde::{Deserialize, Serialize};

/// Branch a freshly auto-registered student carries until they complete
/// their profile. The eligibility evaluator treats it as "branch missing".
pub const BRANCH_NOT_SPECIFIED: &str = "Not Specified";

/// A numeric field as it appears in the student store.
///
/// Records written by the profile form carry strings ("8.2"), seeded
/// records carry "0", and imported rosters carry plain numbers. The store
/// holds whatever shape the writing client used; interpretation is deferred
/// to the reader (the evaluator owns the total-parsing policy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

/// Skills arrive either as a proper list or as one comma-separated string,
/// depending on which client wrote the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    List(Vec<String>),
    Text(String),
}

impl SkillList {
    /// Normalizes to a list of trimmed, non-empty skill names.
    pub fn items(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            SkillList::List(items) => items.iter().map(String::as_str).collect(),
            SkillList::Text(text) => text.split(',').collect(),
        };
        raw.iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for SkillList {
    fn default() -> Self {
        SkillList::List(Vec::new())
    }
}

/// A student record as persisted in `students.json`.
///
/// Academic numerics are deliberately loose: the store has no validation
/// layer, so cgpa and backlogs may be numbers, strings, or absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    pub cgpa: Option<LooseNumber>,
    pub branch: Option<String>,
    pub backlogs: Option<LooseNumber>,
    #[serde(default)]
    pub skills: SkillList,
    pub year: Option<LooseNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_roster_record_with_numeric_fields() {
        let student: Student = serde_json::from_value(json!({
            "id": "s1",
            "name": "Akash Kumar",
            "cgpa": 8.2,
            "branch": "CSE",
            "backlogs": 0,
            "skills": ["React", "Node.js", "Python"]
        }))
        .unwrap();

        assert_eq!(student.cgpa, Some(LooseNumber::Number(8.2)));
        assert_eq!(student.backlogs, Some(LooseNumber::Number(0.0)));
        assert_eq!(student.skills.items(), vec!["React", "Node.js", "Python"]);
    }

    #[test]
    fn test_deserializes_form_record_with_string_fields() {
        let student: Student = serde_json::from_value(json!({
            "id": "s-legacy",
            "name": "Guest",
            "username": "guest",
            "cgpa": "8.5",
            "branch": "Not Specified",
            "backlogs": "0",
            "skills": "React, Node.js, JavaScript",
            "year": "3"
        }))
        .unwrap();

        assert_eq!(student.cgpa, Some(LooseNumber::Text("8.5".to_string())));
        assert_eq!(student.skills.items(), vec!["React", "Node.js", "JavaScript"]);
        assert_eq!(student.year, Some(LooseNumber::Text("3".to_string())));
    }

    #[test]
    fn test_tolerates_missing_and_unknown_fields() {
        // Records written by the old client carry a plaintext password field;
        // it must be ignored, not rejected.
        let student: Student = serde_json::from_value(json!({
            "id": "s2",
            "name": "Priya",
            "password": "hunter2"
        }))
        .unwrap();

        assert_eq!(student.cgpa, None);
        assert_eq!(student.branch, None);
        assert!(student.skills.items().is_empty());
    }

    #[test]
    fn test_loose_number_round_trips_in_original_shape() {
        let number = serde_json::to_value(LooseNumber::Number(7.5)).unwrap();
        assert_eq!(number, json!(7.5));

        let text = serde_json::to_value(LooseNumber::Text("7.5".to_string())).unwrap();
        assert_eq!(text, json!("7.5"));
    }

    #[test]
    fn test_skill_list_drops_blank_entries() {
        let from_text = SkillList::Text(" Java , , SQL ,".to_string());
        assert_eq!(from_text.items(), vec!["Java", "SQL"]);

        let from_list = SkillList::List(vec!["  ".to_string(), "C++".to_string()]);
        assert_eq!(from_list.items(), vec!["C++"]);

        assert!(SkillList::Text(String::new()).items().is_empty());
    }
}
