//! Health Screening API Server
//!
//! HTTP server for the health risk screening form, result, and history views.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use risk_engine::RiskEngine;
use std::sync::Arc;
use storage::{Repository, StorageError};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod views;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// SQLite file backing the submission store
    pub database_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            database_path: "health_history.db".to_string(),
        }
    }
}

/// Application state shared across handlers
pub struct AppState {
    /// Submission store
    pub repository: Repository,
    /// Threshold rule engine
    pub engine: RiskEngine,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around an open repository
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            engine: RiskEngine::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Errors surfaced to the client as failure responses.
///
/// Parse errors never reach this type; they are recovered inline by the
/// submit handler. Storage failures propagate here and become a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal error: {}", self),
        )
            .into_response()
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(routes::submit::show_form).post(routes::submit::handle_submit),
        )
        .route("/history", get(routes::history::show_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repository = Repository::connect(&config.database_path).await?;
    let state = Arc::new(AppState::new(repository));
    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
