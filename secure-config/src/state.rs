//! Application state for the secure config service.

use config::{ConfigDocument, DEFAULT_CONFIG_PATH, EnvironmentSnapshot};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Result, ServiceError};

/// Configuration for the secure config server itself.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Location of the configuration document.
    pub config_path: PathBuf
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH)
        }
    }
}

impl ServerConfig {
    /// Parses `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServiceError::Configuration(format!("Invalid address: {e}")))
    }
}

/// Shared, read-only application state for Axum handlers.
///
/// Built once before the listener is bound and never mutated.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Configuration document served by `/config`.
    pub document: ConfigDocument,
    /// Environment values captured at startup.
    pub environment: EnvironmentSnapshot,
    started_at: Instant
}

impl AppState {
    /// Loads the configuration document and captures the environment.
    pub fn initialize(config: ServerConfig) -> Self {
        let document = ConfigDocument::load(&config.config_path);
        let environment = EnvironmentSnapshot::capture();
        Self::new(config, document, environment)
    }

    /// Creates state from values built elsewhere (useful for testing).
    #[must_use]
    pub fn new(
        config: ServerConfig,
        document: ConfigDocument,
        environment: EnvironmentSnapshot
    ) -> Self {
        Self {
            config: Arc::new(config),
            document,
            environment,
            started_at: Instant::now()
        }
    }

    /// Time since the state was initialized.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
