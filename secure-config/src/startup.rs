//! Startup report written to the log before the server accepts requests.

use config::{ConfigDocument, EnvironmentSnapshot};

use crate::security::Exposure;

/// Logs the listening port, the environment tag, the application name and
/// every captured environment variable.
///
/// Sensitive variables are logged as a fixed mask and `DATABASE_URL` with
/// its password masked. Unset variables are skipped.
pub fn log_startup(port: u16, document: &ConfigDocument, environment: &EnvironmentSnapshot) {
    tracing::info!(port, "Secure config server listening");
    tracing::info!(
        environment = environment.environment().unwrap_or("not defined"),
        app = document.display_name(),
        "Runtime context"
    );

    for (var, value) in environment.entries() {
        if value.is_none() {
            continue;
        }
        let shown = Exposure::for_log(var).render(value);
        tracing::info!(name = var.name(), value = %shown, "Environment variable loaded");
    }

    warn_exposed_keys(document);
}

/// Flags document keys that `/config` will echo unredacted.
fn warn_exposed_keys(document: &ConfigDocument) {
    let paths = document.sensitive_key_paths();
    if paths.is_empty() {
        return;
    }
    tracing::warn!(
        keys = %paths.join(", "),
        "Configuration document contains sensitive-looking keys; /config serves them unredacted"
    );
}
