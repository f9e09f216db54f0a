//! # Environment Snapshot
//!
//! Captures the fixed set of environment variables the secure config
//! service exposes, once, at startup.
//!
//! # Variables
//! - `API_KEY`: third-party API key (sensitive)
//! - `DATABASE_URL`: database connection string
//! - `NODE_ENV`: environment tag (`development`, `production`, ...)
//! - `JWT_SECRET`: token signing secret (sensitive)
//! - `EMAIL_SERVICE`: email provider name
//! - `EMAIL_USER`: email account address
//!
//! Unset and empty variables are both captured as "not set".

use std::env;

/// One of the environment variables captured by [`EnvironmentSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvVar {
    ApiKey,
    DatabaseUrl,
    Environment,
    JwtSecret,
    EmailService,
    EmailUser,
}

impl EnvVar {
    /// Every captured variable, in the fixed reporting order.
    pub const ALL: [EnvVar; 6] = [
        EnvVar::ApiKey,
        EnvVar::DatabaseUrl,
        EnvVar::Environment,
        EnvVar::JwtSecret,
        EnvVar::EmailService,
        EnvVar::EmailUser,
    ];

    /// Name of the process environment variable.
    pub const fn name(self) -> &'static str {
        match self {
            EnvVar::ApiKey => "API_KEY",
            EnvVar::DatabaseUrl => "DATABASE_URL",
            EnvVar::Environment => "NODE_ENV",
            EnvVar::JwtSecret => "JWT_SECRET",
            EnvVar::EmailService => "EMAIL_SERVICE",
            EnvVar::EmailUser => "EMAIL_USER",
        }
    }

    pub fn is_sensitive(self) -> bool {
        utils::is_sensitive_name(self.name())
    }
}

/// Immutable values of the [`EnvVar`] set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    api_key: Option<String>,
    database_url: Option<String>,
    environment: Option<String>,
    jwt_secret: Option<String>,
    email_service: Option<String>,
    email_user: Option<String>,
}

impl EnvironmentSnapshot {
    /// Read the variables from the process environment.
    pub fn capture() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a snapshot from an arbitrary lookup, e.g. a test fixture.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: EnvVar| lookup(var.name()).filter(|value| !value.is_empty());
        Self {
            api_key: read(EnvVar::ApiKey),
            database_url: read(EnvVar::DatabaseUrl),
            environment: read(EnvVar::Environment),
            jwt_secret: read(EnvVar::JwtSecret),
            email_service: read(EnvVar::EmailService),
            email_user: read(EnvVar::EmailUser),
        }
    }

    /// Build a snapshot from `(name, value)` pairs. Unknown names are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        Self::from_lookup(|name| {
            pairs
                .iter()
                .rev()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        })
    }

    /// Value of `var`, if set.
    pub fn get(&self, var: EnvVar) -> Option<&str> {
        match var {
            EnvVar::ApiKey => self.api_key.as_deref(),
            EnvVar::DatabaseUrl => self.database_url.as_deref(),
            EnvVar::Environment => self.environment.as_deref(),
            EnvVar::JwtSecret => self.jwt_secret.as_deref(),
            EnvVar::EmailService => self.email_service.as_deref(),
            EnvVar::EmailUser => self.email_user.as_deref(),
        }
    }

    /// The environment tag (`NODE_ENV`).
    pub fn environment(&self) -> Option<&str> {
        self.get(EnvVar::Environment)
    }

    /// All variables with their values, in [`EnvVar::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (EnvVar, Option<&str>)> + '_ {
        EnvVar::ALL.into_iter().map(move |var| (var, self.get(var)))
    }

    /// `true` when at least one variable is set.
    pub fn any_present(&self) -> bool {
        self.entries().any(|(_, value)| value.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_names_and_order() {
        let names: Vec<&str> = EnvVar::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(
            names,
            vec!["API_KEY", "DATABASE_URL", "NODE_ENV", "JWT_SECRET", "EMAIL_SERVICE", "EMAIL_USER"]
        );
    }

    #[test]
    fn test_sensitivity_classification() {
        assert!(EnvVar::ApiKey.is_sensitive());
        assert!(EnvVar::JwtSecret.is_sensitive());
        assert!(!EnvVar::DatabaseUrl.is_sensitive());
        assert!(!EnvVar::Environment.is_sensitive());
        assert!(!EnvVar::EmailService.is_sensitive());
        assert!(!EnvVar::EmailUser.is_sensitive());
    }

    #[test]
    fn test_from_pairs() {
        let snapshot = EnvironmentSnapshot::from_pairs([
            ("API_KEY", "sk-testtoken1234"),
            ("NODE_ENV", "production"),
            ("UNRELATED", "ignored"),
        ]);
        assert_eq!(snapshot.get(EnvVar::ApiKey), Some("sk-testtoken1234"));
        assert_eq!(snapshot.environment(), Some("production"));
        assert_eq!(snapshot.get(EnvVar::JwtSecret), None);
        assert!(snapshot.any_present());
    }

    #[test]
    fn test_empty_values_are_not_set() {
        let snapshot = EnvironmentSnapshot::from_pairs([("API_KEY", ""), ("EMAIL_USER", "")]);
        assert_eq!(snapshot, EnvironmentSnapshot::default());
        assert!(!snapshot.any_present());
    }

    #[test]
    fn test_entries_follow_fixed_order() {
        let snapshot = EnvironmentSnapshot::from_pairs([("EMAIL_USER", "a@b.c"), ("API_KEY", "k")]);
        let entries: Vec<(EnvVar, Option<&str>)> = snapshot.entries().collect();
        assert_eq!(entries[0], (EnvVar::ApiKey, Some("k")));
        assert_eq!(entries[5], (EnvVar::EmailUser, Some("a@b.c")));
        assert_eq!(entries[2], (EnvVar::Environment, None));
    }

    #[test]
    #[serial]
    fn test_capture_from_process_environment() {
        unsafe {
            for var in EnvVar::ALL {
                env::remove_var(var.name());
            }
            env::set_var("NODE_ENV", "staging");
            env::set_var("JWT_SECRET", "top-secret");
        }

        let snapshot = EnvironmentSnapshot::capture();

        unsafe {
            env::remove_var("NODE_ENV");
            env::remove_var("JWT_SECRET");
        }

        assert_eq!(snapshot.environment(), Some("staging"));
        assert_eq!(snapshot.get(EnvVar::JwtSecret), Some("top-secret"));
        assert_eq!(snapshot.get(EnvVar::ApiKey), None);
    }
}
