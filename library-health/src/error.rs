//! Error types for the library healthcheck service.

use thiserror::Error;

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors that can occur in the library healthcheck service.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Server startup error.
    #[error("Server error: {0}")]
    Server(String),
}

impl LibraryError {
    /// Message safe to return to HTTP clients.
    ///
    /// Database errors are reported by their driver message only.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(e) => match e {
                sqlx::Error::Database(db) => db.message().to_string(),
                other => other.to_string(),
            },
            Self::Configuration(msg) | Self::Server(msg) => msg.clone(),
        }
    }
}
