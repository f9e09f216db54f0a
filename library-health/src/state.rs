//! Application state for the library healthcheck service.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{LibraryError, Result};

/// Database used when `DATABASE_URL` is not provided.
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/library";

/// Configuration for the library healthcheck server.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Maximum database pool connections.
    pub max_connections: u32,
    /// Idle connections are closed after this long.
    pub idle_timeout: Duration,
    /// How long a request waits for a pooled connection.
    pub acquire_timeout: Duration
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_connections: 20,
            idle_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(2)
        }
    }
}

impl LibraryConfig {
    /// Parses `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| LibraryError::Configuration(format!("Invalid address: {e}")))
    }

    /// The database URL with its password masked, for logging.
    pub fn redacted_database_url(&self) -> String {
        utils::redact_url_credentials(&self.database_url)
    }
}

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// `PostgreSQL` connection pool.
    pub pool: PgPool,
    /// Server configuration.
    pub config: Arc<LibraryConfig>
}

impl AppState {
    /// Creates the state with a lazily connecting pool.
    ///
    /// No connection is opened here, so the server starts even when the
    /// database is down.
    pub fn new(config: LibraryConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy(&config.database_url)
            .map_err(|e| LibraryError::Configuration(format!("Invalid database URL: {e}")))?;

        Ok(Self {
            pool,
            config: Arc::new(config)
        })
    }

    /// Creates application state from an existing pool (useful for testing).
    #[must_use]
    pub fn with_pool(pool: PgPool, config: LibraryConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LibraryConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.idle_timeout, Duration::from_secs(30));
        assert_eq!(config.acquire_timeout, Duration::from_secs(2));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_redacted_database_url() {
        let config = LibraryConfig {
            database_url: "postgresql://admin:senha123@db:5432/biblioteca".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.redacted_database_url(),
            "postgresql://admin:****@db:5432/biblioteca"
        );
    }

    #[test]
    fn test_socket_addr_invalid_port_host() {
        let config = LibraryConfig {
            host: "::not-an-ip".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(LibraryError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_new_does_not_connect() {
        let config = LibraryConfig {
            database_url: "postgres://nobody@127.0.0.1:1/library".to_string(),
            ..Default::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.pool.size(), 0);
    }

    #[tokio::test]
    async fn test_new_rejects_malformed_url() {
        let config = LibraryConfig {
            database_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            AppState::new(config),
            Err(LibraryError::Configuration(_))
        ));
    }
}
