//! Server setup and lifecycle for the library service.

use std::sync::Arc;
use tokio::net::TcpListener;
use utils::shutdown::shutdown_signal;

use crate::error::{LibraryError, Result};
use crate::routes::create_router;
use crate::state::{AppState, LibraryConfig};

/// The library healthcheck server.
pub struct LibraryServer {
    state: Arc<AppState>
}

impl LibraryServer {
    /// Creates a new server with a lazily connecting pool.
    pub fn new(config: LibraryConfig) -> Result<Self> {
        let state = AppState::new(config)?;
        Ok(Self {
            state: Arc::new(state)
        })
    }

    /// Creates a server instance from an existing `AppState`.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Runs the HTTP server until SIGTERM or SIGINT, then closes the pool.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;

        let router = create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| LibraryError::Server(format!("Failed to bind to {addr}: {e}")))?;

        tracing::info!(
            port = addr.port(),
            database_url = %self.state.config.redacted_database_url(),
            max_connections = self.state.config.max_connections,
            "Library server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| LibraryError::Server(format!("Server error: {e}")))?;

        self.state.pool.close().await;
        tracing::info!("Library server stopped");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }
}

/// Entry point for running the server from configuration.
pub async fn run_server(config: LibraryConfig) -> Result<()> {
    LibraryServer::new(config)?.run().await
}
