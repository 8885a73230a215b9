pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications;
use crate::drives;
use crate::eligibility::handlers as eligibility;
use crate::state::AppState;
use crate::students;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Students
        .route(
            "/api/v1/students",
            get(students::handle_list).post(students::handle_upsert),
        )
        .route("/api/v1/students/login", post(students::handle_login))
        // Drives
        .route(
            "/api/v1/drives",
            get(drives::handle_list).post(drives::handle_create),
        )
        .route(
            "/api/v1/drives/:id/candidates",
            get(eligibility::handle_candidates),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list).post(applications::handle_apply),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Eligibility
        .route("/api/v1/eligibility/check", post(eligibility::handle_check))
        .route("/api/v1/eligibility/board", get(eligibility::handle_board))
        // Suggestions
        .route("/api/v1/suggestions", post(suggestions::handle_suggestions))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::store::JsonStore;
    use crate::suggestions::provider::UnavailableSuggestions;

    // Bad route syntax panics when the router is assembled, not at request
    // time, so a build-only test catches it.
    #[test]
    fn test_router_builds() {
        let dir = TempDir::new().unwrap();
        let state = AppState {
            store: JsonStore::new(dir.path()),
            suggestions: Arc::new(UnavailableSuggestions),
        };

        let _router = build_router(state);
    }
}
