mod applications;
mod config;
mod drives;
mod eligibility;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
mod students;
mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::JsonStore;
use crate::suggestions::provider::{
    OpenRouterSuggestions, SuggestionProvider, UnavailableSuggestions,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting placement API v{}", env!("CARGO_PKG_VERSION"));

    // Flat-file store rooted at the data directory
    let store = JsonStore::new(config.data_dir.clone());
    info!("Data directory: {}", config.data_dir.display());

    // Advice provider: live model with a key, fixed fallback without
    let suggestions: Arc<dyn SuggestionProvider> = match &config.openrouter_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(OpenRouterSuggestions::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("OPENROUTER_API_KEY not set; AI suggestions disabled");
            Arc::new(UnavailableSuggestions)
        }
    };

    let state = AppState { store, suggestions };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
