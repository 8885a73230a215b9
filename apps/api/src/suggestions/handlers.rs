use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::student::Student;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SuggestionsRequest {
    pub profile: Student,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: String,
}

/// POST /api/v1/suggestions
///
/// Loads the current drive list and asks the configured provider for
/// placement advice for the posted profile.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let drives = state.store.load_drives().await?;
    let suggestions = state.suggestions.suggest(&req.profile, &drives).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}
