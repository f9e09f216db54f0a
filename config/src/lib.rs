//! # Configuration System
//!
//! Startup-time configuration for the secure config demo service.
//!
//! This crate provides:
//! - Configuration file loading (YAML/TOML/JSON, detected by extension)
//! - The immutable [`ConfigDocument`] with a default fallback
//! - The [`EnvironmentSnapshot`] of the fixed environment variable set
//!
//! Both values are built once, before the server starts listening, and are
//! never mutated afterwards.

pub mod document;
pub mod environment;
pub mod file_loader;

pub use document::{AppMetadata, ConfigDocument, DEFAULT_CONFIG_PATH, FALLBACK_APP_NAME};
pub use environment::{EnvVar, EnvironmentSnapshot};
pub use file_loader::{
    ConfigFileError, load_from_file, load_from_json, load_from_toml, load_from_yaml,
};
