//! HTTP request handlers for the secure config service.
//!
//! Every handler is a pure read of [`AppState`]; none of them can fail.

use axum::{
    Json,
    extract::State,
    http::Uri,
    response::Html
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::pages;
use crate::security::SecurityView;
use crate::state::AppState;

/// `app` object of the `/info` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>
}

/// `configFile` object of the `/info` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigFileInfo {
    pub loaded: bool,
    pub path: String,
    pub writable: bool
}

/// Information response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub status: String,
    pub app: AppInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub features: Value,
    pub security: SecurityView,
    pub config_file: ConfigFileInfo
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since startup.
    pub uptime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub config_loaded: bool,
    pub env_vars_loaded: bool
}

/// Configuration document response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigResponse {
    pub config: Map<String, Value>,
    pub note: String
}

/// GET /
///
/// Landing page titled with the application name.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let path = state.document.path().display().to_string();
    Html(pages::index_page(state.document.display_name(), &path))
}

/// GET /info
///
/// Application metadata, feature list and the redacted security view.
pub async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    tracing::debug!("Building info response");

    let document = &state.document;
    let app = document.app();

    Json(InfoResponse {
        status: "ok".to_string(),
        app: AppInfo {
            name: app.name.clone(),
            version: app.version.clone(),
            description: app.description.clone()
        },
        environment: state.environment.environment().map(str::to_string),
        features: document.features().clone(),
        security: SecurityView::from_snapshot(&state.environment),
        config_file: ConfigFileInfo {
            loaded: document.loaded(),
            path: document.path().display().to_string(),
            writable: false
        }
    })
}

/// GET /health
///
/// Always healthy: the service has no external dependency to check.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime().as_secs_f64(),
        environment: state.environment.environment().map(str::to_string),
        config_loaded: state.document.loaded(),
        env_vars_loaded: state.environment.any_present()
    })
}

/// GET /config
///
/// Returns the whole document without redaction. Sensitive-looking keys
/// are reported once at startup instead.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    let path = state.document.path().display();
    Json(ConfigResponse {
        config: state.document.root().clone(),
        note: format!("Configuration file mounted read-only at {path}")
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ServiceError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ServiceError::NotFound(uri.path().to_string())
}
