use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::drive::{Drive, DriveCriteria};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateDriveRequest {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub package: String,
    pub criteria: DriveCriteria,
}

/// GET /api/v1/drives
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Drive>>, AppError> {
    Ok(Json(state.store.load_drives().await?))
}

/// POST /api/v1/drives
///
/// The server owns the id and the creation timestamp; clients only send
/// the posting itself.
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateDriveRequest>,
) -> Result<Json<Drive>, AppError> {
    if req.name.trim().is_empty() || req.role.trim().is_empty() {
        return Err(AppError::Validation(
            "drive name and role are required".to_string(),
        ));
    }

    let drive = Drive {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        role: req.role,
        package: req.package,
        criteria: req.criteria,
        created_at: Some(Utc::now()),
    };

    let mut drives = state.store.load_drives().await?;
    drives.push(drive.clone());
    state.store.save_drives(&drives).await?;
    info!("Created drive {} ({})", drive.id, drive.name);

    Ok(Json(drive))
}
