use std::sync::Arc;

use crate::store::JsonStore;
use crate::suggestions::provider::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    /// Pluggable advice provider. OpenRouter when a key is configured,
    /// the keyless fallback otherwise.
    pub suggestions: Arc<dyn SuggestionProvider>,
}
