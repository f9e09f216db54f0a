//! # Configuration File Loading
//!
//! Loads a configuration document from YAML, TOML or JSON files.
//!
//! Supports automatic format detection based on file extension. Every
//! loader returns the raw top-level mapping; interpretation is left to
//! [`ConfigDocument`](crate::document::ConfigDocument).
//!
//! Error values never carry file content, only the location or kind of the
//! failure, so they can be logged as-is.

use serde_json::{Map, Value};
use std::path::Path;

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("Config file has no extension")]
    NoExtension,

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("Top-level value must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Load a configuration mapping from a YAML file.
///
/// ## Usage
/// ```rust,no_run
/// use config::load_from_yaml;
/// use std::path::Path;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let root = load_from_yaml(Path::new("/etc/app/config.yml"))?;
///     println!("top-level keys: {}", root.len());
///     Ok(())
/// }
/// ```
///
/// ## Error Handling
/// Returns `ConfigFileError` for:
/// - File not found or unreadable
/// - Invalid YAML syntax (reported by line and column only)
/// - A top-level value that is not a mapping, including an empty file
pub fn load_from_yaml(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let contents = read_contents(path)?;

    let mut yaml: serde_yaml::Value = serde_yaml::from_str(&contents).map_err(|e| {
        ConfigFileError::YamlParse(match e.location() {
            Some(loc) => format!("syntax error at line {}, column {}", loc.line(), loc.column()),
            None => "invalid document".to_string(),
        })
    })?;

    yaml.apply_merge()
        .map_err(|_| ConfigFileError::YamlParse("invalid merge key".to_string()))?;

    let value = serde_json::to_value(yaml).map_err(|_| {
        ConfigFileError::YamlParse("document cannot be represented as JSON".to_string())
    })?;

    into_mapping(value)
}

/// Load a configuration mapping from a TOML file.
pub fn load_from_toml(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let contents = read_contents(path)?;

    let table: toml::Table = toml::from_str(&contents)
        .map_err(|e| ConfigFileError::TomlParse(e.message().to_string()))?;

    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// Datetimes become their RFC 3339 text; non-finite floats become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect()
        ),
    }
}

/// Load a configuration mapping from a JSON file.
pub fn load_from_json(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let contents = read_contents(path)?;

    let value: Value = serde_json::from_str(&contents).map_err(|e| {
        ConfigFileError::JsonParse(format!(
            "{:?} error at line {}, column {}",
            e.classify(),
            e.line(),
            e.column()
        ))
    })?;

    into_mapping(value)
}

/// Load a configuration mapping from file with auto-detection.
///
/// ## Supported Formats
/// - `.yaml` / `.yml`: YAML format
/// - `.toml`: TOML format
/// - `.json`: JSON format
pub fn load_from_file(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => load_from_yaml(path),
        "toml" => load_from_toml(path),
        "json" => load_from_json(path),
        other => Err(ConfigFileError::UnsupportedFormat(other.to_string())),
    }
}

fn read_contents(path: &Path) -> Result<String, ConfigFileError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigFileError::FileNotFound(path.display().to_string()),
        _ => ConfigFileError::Io(e),
    })
}

fn into_mapping(value: Value) -> Result<Map<String, Value>, ConfigFileError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ConfigFileError::NotAMapping("an empty document")),
        Value::Bool(_) => Err(ConfigFileError::NotAMapping("a boolean")),
        Value::Number(_) => Err(ConfigFileError::NotAMapping("a number")),
        Value::String(_) => Err(ConfigFileError::NotAMapping("a string")),
        Value::Array(_) => Err(ConfigFileError::NotAMapping("a sequence")),
    }
}
