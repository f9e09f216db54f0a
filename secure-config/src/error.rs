//! Error types for the secure config service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur in the secure config service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Invalid server settings (bind address, port).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Server startup or runtime error.
    #[error("Server error: {0}")]
    Server(String),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for HTTP endpoints.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                msg.as_str(),
                None,
            ),
            Self::Server(msg) => {
                tracing::error!(message = %msg, "Server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    "An internal error occurred",
                    None,
                )
            }
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Route not found",
                Some(path.clone()),
            ),
        };

        let body = ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ServiceError::Configuration("invalid port".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid port");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = ServiceError::NotFound("/secrets".to_string());
        assert_eq!(err.to_string(), "Not found: /secrets");
    }

    #[test]
    fn test_not_found_status() {
        let response = ServiceError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_error_hides_message() {
        let response = ServiceError::Server("bind failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_without_details() {
        let resp = ErrorResponse {
            error: "test error".to_string(),
            code: "TEST_ERROR".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("TEST_ERROR"));
        assert!(!json.contains("details"));
    }
}
