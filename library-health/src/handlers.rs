//! HTTP request handlers for the library service.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response}
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::db::{self, DatabaseInfo};
use crate::error::LibraryError;
use crate::pages;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>
}

/// Database identity response.
#[derive(Debug, Serialize)]
pub struct DbStatusResponse {
    pub status: String,
    pub info: DatabaseInfo
}

/// Generic `{status, message}` body.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String
}

impl StatusMessage {
    fn error(err: &LibraryError) -> Self {
        Self {
            status: "error".to_string(),
            message: err.public_message()
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /
pub async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// GET /health
///
/// Returns 200 when `SELECT NOW()` succeeds and 503 otherwise.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match db::now(&state.pool).await {
        Ok(db_time) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                timestamp: timestamp(),
                database: "connected".to_string(),
                db_time: Some(db_time),
                error: None
            })
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    timestamp: timestamp(),
                    database: "disconnected".to_string(),
                    db_time: None,
                    error: Some(e.public_message())
                })
            )
        }
    }
}

/// GET /db-status
pub async fn db_status(State(state): State<Arc<AppState>>) -> Response {
    match db::database_info(&state.pool).await {
        Ok(info) => Json(DbStatusResponse {
            status: "connected".to_string(),
            info
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Database status query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(StatusMessage::error(&e))).into_response()
        }
    }
}

/// GET /setup
pub async fn setup(State(state): State<Arc<AppState>>) -> Response {
    match db::setup_schema(&state.pool).await {
        Ok(()) => {
            tracing::info!("Books table ready");
            Json(StatusMessage {
                status: "success".to_string(),
                message: "Table created and sample data inserted".to_string()
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Setup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(StatusMessage::error(&e))).into_response()
        }
    }
}

/// GET /books
pub async fn books(State(state): State<Arc<AppState>>) -> Response {
    match db::list_books(&state.pool).await {
        Ok(books) => Html(pages::books_page(&books)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to list books");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::books_error_page(&e.public_message()))
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_response_omits_db_time() {
        let body = serde_json::to_value(HealthResponse {
            status: "unhealthy".to_string(),
            timestamp: timestamp(),
            database: "disconnected".to_string(),
            db_time: None,
            error: Some("pool timed out".to_string())
        })
        .unwrap();

        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["database"], "disconnected");
        assert_eq!(body["error"], "pool timed out");
        assert!(body.get("dbTime").is_none());
    }

    #[test]
    fn test_healthy_response_uses_camel_case() {
        let body = serde_json::to_value(HealthResponse {
            status: "healthy".to_string(),
            timestamp: timestamp(),
            database: "connected".to_string(),
            db_time: Some(Utc::now()),
            error: None
        })
        .unwrap();

        assert!(body.get("dbTime").is_some());
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_timestamp_is_utc_millis() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
