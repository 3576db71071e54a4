//! Router and application state, shared by the production binary and the
//! integration tests.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use px_core::config::AppConfig;

use crate::api;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// Build the API router with all endpoints and middleware.
pub fn build_router(config: AppConfig) -> Router {
    let upload_cap = config.server.max_upload_bytes;
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/convert", post(api::handle_convert))
        .route("/api/info", get(api::handle_info))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(upload_cap))
}
