use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ApplicationFilter {
    pub student_id: Option<String>,
    pub drive_id: Option<String>,
}

#[derive(Deserialize)]
pub struct ApplyRequest {
    pub student_id: String,
    pub drive_id: String,
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// GET /api/v1/applications?student_id=&drive_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Result<Json<Vec<Application>>, AppError> {
    let mut applications = state.store.load_applications().await?;
    if let Some(student_id) = &filter.student_id {
        applications.retain(|a| &a.student_id == student_id);
    }
    if let Some(drive_id) = &filter.drive_id {
        applications.retain(|a| &a.drive_id == drive_id);
    }
    Ok(Json(applications))
}

/// POST /api/v1/applications
///
/// One application per (student, drive) pair. The status always starts at
/// Applied and the timestamp is server-side, whatever the client sent.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<Application>, AppError> {
    let mut applications = state.store.load_applications().await?;

    let duplicate = applications
        .iter()
        .any(|a| a.student_id == req.student_id && a.drive_id == req.drive_id);
    if duplicate {
        return Err(AppError::Conflict("Already applied".to_string()));
    }

    let application = Application {
        id: Uuid::new_v4().to_string(),
        student_id: req.student_id,
        drive_id: req.drive_id,
        status: ApplicationStatus::Applied,
        applied_at: Utc::now(),
        updated_at: None,
    };

    applications.push(application.clone());
    state.store.save_applications(&applications).await?;
    info!(
        "Student {} applied to drive {}",
        application.student_id, application.drive_id
    );

    Ok(Json(application))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Application>, AppError> {
    let mut applications = state.store.load_applications().await?;

    let application = applications
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    application.status = req.status;
    application.updated_at = Some(Utc::now());
    let updated = application.clone();

    state.store.save_applications(&applications).await?;

    Ok(Json(updated))
}
