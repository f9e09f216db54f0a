//! Redacted projection of the environment snapshot.
//!
//! Every environment variable is rendered through an [`Exposure`] rule.
//! Variables whose name is sensitive never use [`Exposure::Verbatim`].

use config::{EnvVar, EnvironmentSnapshot};
use serde::Serialize;

/// How a value may appear on an output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Replaced by a fixed mask.
    Redacted,
    /// Only whether the value is set.
    PresenceOnly,
    /// `***` plus the last four characters.
    Suffix,
    /// Email address with the local part masked.
    MaskedEmail,
    /// URL with any embedded password replaced by `****`.
    UrlCredentials,
    /// Shown as-is.
    Verbatim,
}

impl Exposure {
    /// Rule for the `/info` security view.
    pub fn for_http(var: EnvVar) -> Self {
        match var {
            EnvVar::ApiKey => Self::Suffix,
            EnvVar::DatabaseUrl | EnvVar::JwtSecret => Self::PresenceOnly,
            EnvVar::EmailUser => Self::MaskedEmail,
            EnvVar::Environment | EnvVar::EmailService => Self::Verbatim,
        }
    }

    /// Rule for the startup log.
    pub fn for_log(var: EnvVar) -> Self {
        match var {
            var if var.is_sensitive() => Self::Redacted,
            EnvVar::DatabaseUrl => Self::UrlCredentials,
            _ => Self::Verbatim,
        }
    }

    pub fn render(self, value: Option<&str>) -> String {
        match (self, value) {
            (Self::Redacted, Some(_)) => utils::LOG_MASK.to_string(),
            (Self::Suffix, value) => utils::mask_api_key(value),
            (Self::PresenceOnly, Some(_)) => "configured".to_string(),
            (Self::PresenceOnly | Self::Verbatim | Self::UrlCredentials, None) => {
                "not configured".to_string()
            }
            (Self::MaskedEmail, Some(email)) => utils::mask_email(email),
            (Self::UrlCredentials, Some(url)) => utils::redact_url_credentials(url),
            (Self::Verbatim, Some(value)) => value.to_string(),
            (Self::Redacted | Self::MaskedEmail, None) => "not set".to_string(),
        }
    }
}

/// The `security` object of the `/info` response.
///
/// Recomputed from the snapshot on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityView {
    pub api_key: String,
    pub database: String,
    pub jwt_secret: String,
    pub email_service: String,
    pub email_user: String,
}

impl SecurityView {
    pub fn from_snapshot(snapshot: &EnvironmentSnapshot) -> Self {
        let render = |var: EnvVar| Exposure::for_http(var).render(snapshot.get(var));
        Self {
            api_key: render(EnvVar::ApiKey),
            database: render(EnvVar::DatabaseUrl),
            jwt_secret: render(EnvVar::JwtSecret),
            email_service: render(EnvVar::EmailService),
            email_user: render(EnvVar::EmailUser),
        }
    }
}
