//! Server setup and lifecycle for the secure config service.

use std::sync::Arc;
use tokio::net::TcpListener;
use utils::shutdown::shutdown_signal;

use crate::error::{Result, ServiceError};
use crate::routes::create_router;
use crate::startup::log_startup;
use crate::state::{AppState, ServerConfig};

/// The secure config server.
pub struct SecureConfigServer {
    state: Arc<AppState>
}

impl SecureConfigServer {
    /// Creates a server, loading the document and environment up front.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState::initialize(config))
        }
    }

    /// Creates a server instance from an existing `AppState`.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Runs the HTTP server.
    ///
    /// This method blocks until SIGTERM or SIGINT is received.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;

        let router = create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServiceError::Server(format!("Failed to bind to {addr}: {e}")))?;

        log_startup(addr.port(), &self.state.document, &self.state.environment);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServiceError::Server(format!("Server error: {e}")))?;

        tracing::info!("Secure config server stopped");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

/// Entry point for running the server from configuration.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    SecureConfigServer::new(config).run().await
}
