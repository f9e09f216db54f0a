//! Shared test fixtures for the demo services.
//!
//! Provides a single, shared PostgreSQL testcontainer (database `library`)
//! for the `library-health` integration tests. The fixture is lazily
//! initialized once per test process and cleaned up when the process exits.
//! Tests skip themselves when [`postgres`] returns `None`.

mod fixtures;

pub use fixtures::*;
