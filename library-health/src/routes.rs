//! Router configuration for the library service.

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Creates the Axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/db-status", get(handlers::db_status))
        .route("/setup", get(handlers::setup))
        .route("/books", get(handlers::books))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
