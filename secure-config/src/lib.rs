//! # Secure Config Service
//!
//! HTTP service that exposes a read-only configuration document and a
//! redacted view of selected environment variables.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML landing page
//! - `GET /info` - Application metadata, features and masked secrets
//! - `GET /health` - Liveness, uptime and load status
//! - `GET /config` - The configuration document, verbatim
//!
//! ## State
//!
//! The document and the environment snapshot are loaded once, before the
//! listener is bound, and shared immutably with every handler. A missing or
//! malformed document is replaced by a minimal default and reported as
//! `configLoaded: false`.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod security;
pub mod server;
pub mod startup;
pub mod state;
pub mod telemetry;

pub use error::ServiceError;
pub use routes::create_router;
pub use server::SecureConfigServer;
pub use state::{AppState, ServerConfig};
