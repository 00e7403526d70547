//! Planejaqui Server
//!
//! Minimal backend for the wishlist UI.
//! Layered architecture:
//! - repository: the single JSON data file
//! - commands: HTTP handlers
//! - config / error: ambient concerns
//!
//! Items and their validation live in `planejaqui-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod repository;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::{ServerConfig, CONFIG_FILE};
pub use error::{ApiError, ServerError};
use repository::{JsonFileRepository, SnapshotRepository};

/// Application state shared across handlers
pub struct AppState {
    pub repository: Arc<dyn SnapshotRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn SnapshotRepository>) -> Self {
        Self { repository }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(Arc::new(JsonFileRepository::new(&config.data_file)))
    }
}

/// Create the API router, optionally serving the built UI for other paths
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/save-data", post(commands::save_data))
        .route("/api/data", get(commands::load_data))
        .route("/data.json", get(commands::load_data))
        .route("/health", get(commands::health))
        .with_state(state);

    let router = match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and run until the process is stopped
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::from_config(&config));
    let app = create_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        "Servidor rodando em {} (dados em {})",
        config.bind,
        config.data_file.display()
    );
    axum::serve(listener, app).await?;
    Ok(())
}
