//! # Library Healthcheck Service
//!
//! Small book catalogue on PostgreSQL, used to demonstrate container
//! health checks.
//!
//! ## Endpoints
//!
//! - `GET /` - HTML landing page
//! - `GET /health` - `SELECT NOW()` probe, 503 when the database is unreachable
//! - `GET /db-status` - Database name, user and server version
//! - `GET /setup` - Creates the `books` table and sample rows (idempotent)
//! - `GET /books` - HTML book list
//!
//! The pool connects lazily, so the process starts and answers `/health`
//! even while the database is still coming up.

pub mod db;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use error::LibraryError;
pub use routes::create_router;
pub use server::LibraryServer;
pub use state::{AppState, LibraryConfig};
