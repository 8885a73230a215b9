use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::student::{LooseNumber, SkillList, Student, BRANCH_NOT_SPECIFIED};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub student: Student,
    pub created: bool,
}

/// GET /api/v1/students
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.store.load_students().await?))
}

/// POST /api/v1/students
///
/// Upsert by id: replaces an existing record wholesale or appends a new
/// one, exactly as posted.
pub async fn handle_upsert(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, AppError> {
    if student.id.trim().is_empty() {
        return Err(AppError::Validation("student id is required".to_string()));
    }
    let saved = state.store.upsert_student(student).await?;
    Ok(Json(saved))
}

/// POST /api/v1/students/login
///
/// Hackathon-era account flow kept on purpose: find by username or
/// auto-register a blank profile. Store failures on either side are
/// logged and tolerated so a broken data directory still lets people in.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = if req.username.trim().is_empty() {
        "guest".to_string()
    } else {
        req.username
    };
    info!("Login attempt for {username}");

    let mut students = match state.store.load_students().await {
        Ok(students) => students,
        Err(e) => {
            warn!("Could not read student roster, treating as empty: {e}");
            Vec::new()
        }
    };
    if let Some(student) = students
        .iter()
        .find(|s| s.username.as_deref() == Some(username.as_str()))
    {
        return Ok(Json(LoginResponse {
            student: student.clone(),
            created: false,
        }));
    }

    let student = seeded_profile(&username);
    students.push(student.clone());
    if let Err(e) = state.store.save_students(&students).await {
        warn!("Could not persist auto-registered student: {e}");
    } else {
        info!("Auto-registered student {} ({username})", student.id);
    }

    Ok(Json(LoginResponse {
        student,
        created: true,
    }))
}

/// A fresh profile as registration seeds it: zeroed academics stored as
/// strings, placeholder branch, no skills. The eligibility engine treats
/// this as incomplete until the student fills it in.
fn seeded_profile(username: &str) -> Student {
    Student {
        id: Uuid::new_v4().to_string(),
        name: capitalize(username),
        username: Some(username.to_string()),
        cgpa: Some(LooseNumber::Text("0".to_string())),
        branch: Some(BRANCH_NOT_SPECIFIED.to_string()),
        backlogs: Some(LooseNumber::Text("0".to_string())),
        skills: SkillList::Text(String::new()),
        year: None,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::store::JsonStore;
    use crate::suggestions::provider::UnavailableSuggestions;

    fn make_state(dir: &TempDir) -> AppState {
        AppState {
            store: JsonStore::new(dir.path()),
            suggestions: Arc::new(UnavailableSuggestions),
        }
    }

    fn make_student(id: &str, username: &str) -> Student {
        Student {
            id: id.to_string(),
            name: capitalize(username),
            username: Some(username.to_string()),
            cgpa: Some(LooseNumber::Number(8.0)),
            branch: Some("CSE".to_string()),
            backlogs: Some(LooseNumber::Number(0.0)),
            skills: SkillList::default(),
            year: None,
        }
    }

    #[tokio::test]
    async fn test_login_auto_registers_unknown_username() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);

        let Json(resp) = handle_login(
            State(state.clone()),
            Json(LoginRequest {
                username: "riya".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(resp.created);
        assert_eq!(resp.student.name, "Riya");
        assert_eq!(resp.student.username.as_deref(), Some("riya"));
        assert_eq!(resp.student.branch.as_deref(), Some(BRANCH_NOT_SPECIFIED));

        let roster = state.store.load_students().await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, resp.student.id);
    }

    #[tokio::test]
    async fn test_login_finds_existing_by_username() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);
        state
            .store
            .save_students(&[make_student("s1", "riya")])
            .await
            .unwrap();

        let Json(resp) = handle_login(
            State(state.clone()),
            Json(LoginRequest {
                username: "riya".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(!resp.created);
        assert_eq!(resp.student.id, "s1");
        assert_eq!(state.store.load_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_defaults_blank_username_to_guest() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);

        let Json(resp) = handle_login(
            State(state),
            Json(LoginRequest {
                username: "   ".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(resp.student.username.as_deref(), Some("guest"));
        assert_eq!(resp.student.name, "Guest");
    }

    #[tokio::test]
    async fn test_login_treats_corrupt_roster_as_empty() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);
        tokio::fs::write(dir.path().join("students.json"), "not json")
            .await
            .unwrap();

        let Json(resp) = handle_login(
            State(state.clone()),
            Json(LoginRequest {
                username: "riya".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(resp.created);
        assert_eq!(resp.student.username.as_deref(), Some("riya"));
        // The rewrite replaces the corrupt file with a valid roster.
        assert_eq!(state.store.load_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_record() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);
        state
            .store
            .save_students(&[make_student("s1", "riya")])
            .await
            .unwrap();

        let mut updated = make_student("s1", "riya");
        updated.cgpa = Some(LooseNumber::Number(9.1));

        let Json(saved) = handle_upsert(State(state.clone()), Json(updated))
            .await
            .unwrap();

        assert_eq!(saved.cgpa, Some(LooseNumber::Number(9.1)));
        let roster = state.store.load_students().await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].cgpa, Some(LooseNumber::Number(9.1)));
    }

    #[tokio::test]
    async fn test_upsert_appends_new_record() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);
        state
            .store
            .save_students(&[make_student("s1", "riya")])
            .await
            .unwrap();

        handle_upsert(State(state.clone()), Json(make_student("s2", "arjun")))
            .await
            .unwrap();

        assert_eq!(state.store.load_students().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_upsert_rejects_blank_id() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);

        let result = handle_upsert(State(state), Json(make_student("  ", "riya"))).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_is_empty_before_first_write() {
        let dir = TempDir::new().unwrap();
        let state = make_state(&dir);

        let Json(roster) = handle_list(State(state)).await.unwrap();

        assert!(roster.is_empty());
    }
}
