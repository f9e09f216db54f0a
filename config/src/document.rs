//! # Configuration Document
//!
//! The structured document served by the secure config service.
//!
//! The document is read once at startup. When loading fails the service
//! keeps running on a minimal default mapping and reports the failure
//! through [`ConfigDocument::loaded`].

use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};

use crate::file_loader::{ConfigFileError, load_from_file};

/// Fixed location of the mounted configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/app/config.yml";

/// Display name used when the document does not name the application.
pub const FALLBACK_APP_NAME: &str = "API";

/// Version reported by the default document.
pub const FALLBACK_APP_VERSION: &str = "1.0.0";

/// Application metadata resolved from the `app` section.
///
/// Values are kept verbatim, so a numeric `version` stays a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppMetadata {
    pub name: Option<Value>,
    pub version: Option<Value>,
    pub description: Option<Value>,
}

/// Immutable configuration document plus the fields derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
    path: PathBuf,
    loaded: bool,
    app: AppMetadata,
    features: Value,
    display_name: String,
}

impl ConfigDocument {
    /// Load the document at `path`, falling back to [`ConfigDocument::fallback`]
    /// on any error.
    ///
    /// The failure is logged as a warning carrying the error kind and path.
    /// File content never reaches the log.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(document) => {
                tracing::info!(path = %path.display(), "Configuration loaded");
                document
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load configuration, using defaults"
                );
                Self::fallback(path)
            }
        }
    }

    /// Load the document at `path`, surfacing the error.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let root = load_from_file(path)?;
        Ok(Self::from_mapping(root, path, true))
    }

    /// The default document `{app: {name, version}}` used when loading fails.
    pub fn fallback(path: impl AsRef<Path>) -> Self {
        let root = match json!({
            "app": { "name": FALLBACK_APP_NAME, "version": FALLBACK_APP_VERSION }
        }) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::from_mapping(root, path.as_ref(), false)
    }

    /// Build a document from an in-memory mapping.
    pub fn from_mapping(root: Map<String, Value>, path: &Path, loaded: bool) -> Self {
        let app_section = root.get("app").and_then(Value::as_object);
        let field = |key: &str| {
            app_section
                .and_then(|app| app.get(key))
                .filter(|v| !v.is_null())
                .cloned()
        };
        let app = AppMetadata {
            name: field("name"),
            version: field("version"),
            description: field("description"),
        };

        let display_name = app
            .name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_APP_NAME)
            .to_string();

        let features = match root.get("features") {
            Some(Value::Null) | None => Value::Array(Vec::new()),
            Some(other) => other.clone(),
        };

        Self {
            root,
            path: path.to_path_buf(),
            loaded,
            app,
            features,
            display_name,
        }
    }

    /// The full document, exactly as parsed.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Path the document was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` when the document came from the file rather than the fallback.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn app(&self) -> &AppMetadata {
        &self.app
    }

    /// The `features` entry verbatim, or an empty sequence.
    pub fn features(&self) -> &Value {
        &self.features
    }

    /// Application name suitable for page titles and logs.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Dotted paths of keys whose name looks sensitive, in key order.
    ///
    /// Only key paths are returned. Sequence elements are addressed by index.
    pub fn sensitive_key_paths(&self) -> Vec<String> {
        let mut found = Vec::new();
        for (key, value) in &self.root {
            collect_sensitive(key, Some(key.as_str()), value, &mut found);
        }
        found
    }
}

fn collect_sensitive(path: &str, key: Option<&str>, value: &Value, found: &mut Vec<String>) {
    if key.is_some_and(utils::is_sensitive_key) {
        found.push(path.to_string());
    }

    match value {
        Value::Object(map) => {
            for (child_key, child) in map {
                collect_sensitive(&format!("{path}.{child_key}"), Some(child_key.as_str()), child, found);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_sensitive(&format!("{path}.{index}"), None, child, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_fallback_document() {
        let doc = ConfigDocument::fallback(DEFAULT_CONFIG_PATH);
        assert!(!doc.loaded());
        assert_eq!(doc.path(), Path::new(DEFAULT_CONFIG_PATH));
        assert_eq!(doc.display_name(), "API");
        assert_eq!(doc.app().name, Some(json!("API")));
        assert_eq!(doc.app().version, Some(json!("1.0.0")));
        assert_eq!(doc.app().description, None);
        assert_eq!(doc.features(), &json!([]));
        assert_eq!(
            Value::Object(doc.root().clone()),
            json!({"app": {"name": "API", "version": "1.0.0"}})
        );
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let doc = ConfigDocument::load("/nonexistent/config.yml");
        assert!(!doc.loaded());
        assert_eq!(doc.display_name(), FALLBACK_APP_NAME);
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "app: [broken\n").unwrap();

        let doc = ConfigDocument::load(&path);
        assert!(!doc.loaded());
        assert_eq!(doc.path(), path.as_path());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "app:\n  name: Secure API\n  version: 3\n  description: demo\nfeatures: [a, b]\n",
        )
        .unwrap();

        let doc = ConfigDocument::load(&path);
        assert!(doc.loaded());
        assert_eq!(doc.display_name(), "Secure API");
        assert_eq!(doc.app().version, Some(json!(3)));
        assert_eq!(doc.app().description, Some(json!("demo")));
        assert_eq!(doc.features(), &json!(["a", "b"]));
    }

    #[test]
    fn test_load_resolves_merged_app_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "base: &base\n  name: Shared API\n  version: 4.0.0\napp:\n  <<: *base\n  description: merged\n",
        )
        .unwrap();

        let doc = ConfigDocument::load(&path);
        assert!(doc.loaded());
        assert_eq!(doc.display_name(), "Shared API");
        assert_eq!(doc.app().version, Some(json!("4.0.0")));
        assert_eq!(doc.app().description, Some(json!("merged")));
    }

    #[test]
    fn test_missing_app_section_resolves_defaults() {
        let doc = ConfigDocument::from_mapping(
            mapping(json!({"database": {"pool": 5}})),
            Path::new("config.yml"),
            true,
        );
        assert_eq!(doc.app(), &AppMetadata::default());
        assert_eq!(doc.display_name(), FALLBACK_APP_NAME);
        assert_eq!(doc.features(), &json!([]));
    }

    #[test]
    fn test_non_string_name_keeps_value_but_not_display_name() {
        let doc = ConfigDocument::from_mapping(
            mapping(json!({"app": {"name": 42}, "features": null})),
            Path::new("config.yml"),
            true,
        );
        assert_eq!(doc.app().name, Some(json!(42)));
        assert_eq!(doc.display_name(), FALLBACK_APP_NAME);
        assert_eq!(doc.features(), &json!([]));
    }

    #[test]
    fn test_features_kept_verbatim_when_not_a_sequence() {
        let doc = ConfigDocument::from_mapping(
            mapping(json!({"features": {"cache": true}})),
            Path::new("config.yml"),
            true,
        );
        assert_eq!(doc.features(), &json!({"cache": true}));
    }

    #[test]
    fn test_sensitive_key_paths() {
        let doc = ConfigDocument::from_mapping(
            mapping(json!({
                "app": {"name": "x"},
                "auth": {"jwtSecret": "s", "providers": [{"apiKey": "k"}]},
                "db_password": "p"
            })),
            Path::new("config.yml"),
            true,
        );
        assert_eq!(
            doc.sensitive_key_paths(),
            vec![
                "auth.jwtSecret".to_string(),
                "auth.providers.0.apiKey".to_string(),
                "db_password".to_string(),
            ]
        );
    }
}
