//! Store connection settings sourced from the environment.
//!
//! Settings travel as an explicit struct handed to the pool constructor, so
//! test suites can point the same code at a scratch database instead of
//! mutating process-wide state.

use std::env;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const ENV_HOST: &str = "DB_HOST";
const ENV_PORT: &str = "DB_PORT";
const ENV_NAME: &str = "DB_NAME";
const ENV_USER: &str = "DB_USER";
const ENV_PASSWORD: &str = "DB_PASSWORD";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_NAME: &str = "company_db";
const DEFAULT_USER: &str = "postgres";

/// Connection settings for the backing Postgres store.
///
/// Everything has a default except the password, which must be supplied by
/// the deployment environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DB_PASSWORD is not set")]
    MissingPassword,

    #[error("DB_PORT value '{value}' is not a valid port")]
    InvalidPort { value: String },
}

impl StoreConfig {
    /// Read connection settings from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `DB_PASSWORD` is absent or blank, or when `DB_PORT` does
    /// not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let password = get(ENV_PASSWORD)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingPassword)?;

        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: get(ENV_NAME).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            user: get(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_string()),
            password,
        })
    }

    /// Structured sqlx connect options.
    ///
    /// Built field by field rather than through a URL string, so passwords
    /// containing reserved characters need no escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// Point this config at a different database (scratch stores in tests).
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_apply_when_only_password_is_set() {
        let config = StoreConfig::from_lookup(lookup(&[("DB_PASSWORD", "s3cret")])).unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "company_db");
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password, "s3cret");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6432"),
            ("DB_NAME", "company_test"),
            ("DB_USER", "staffdeck"),
            ("DB_PASSWORD", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6432);
        assert_eq!(config.database, "company_test");
        assert_eq!(config.user, "staffdeck");
    }

    #[test]
    fn missing_password_is_an_error() {
        let err = StoreConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPassword));
    }

    #[test]
    fn blank_password_is_an_error() {
        let err = StoreConfig::from_lookup(lookup(&[("DB_PASSWORD", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPassword));
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let err = StoreConfig::from_lookup(lookup(&[
            ("DB_PASSWORD", "s3cret"),
            ("DB_PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn with_database_swaps_only_the_database() {
        let config = StoreConfig::from_lookup(lookup(&[("DB_PASSWORD", "s3cret")]))
            .unwrap()
            .with_database("scratch");

        assert_eq!(config.database, "scratch");
        assert_eq!(config.host, "localhost");
    }
}
