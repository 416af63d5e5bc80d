//! Postgres settings for the decision store.
//!
//! Each CLI invocation opens a small pool, runs one command and exits, so
//! only the pool ceiling and the acquire timeout are tunable.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `max_connections`.
pub const MAX_POOL_SIZE: u32 = 32;

/// The `database` section; present only when decisions should persist.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` when the pool is opened
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("database.url"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(ValidationError::InvalidPoolSize(self.max_connections));
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidAcquireTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_max_connections() -> u32 {
    4
}

fn default_acquire_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn empty_url_is_missing() {
        assert_eq!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired("database.url"))
        );
    }

    #[test]
    fn rejects_non_postgres_url() {
        assert_eq!(
            with_url("mysql://localhost/db").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        );
    }

    #[test]
    fn pool_size_must_be_within_bounds() {
        let mut config = with_url("postgres://localhost/decisions");
        config.max_connections = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidPoolSize(0)));

        config.max_connections = MAX_POOL_SIZE + 1;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPoolSize(MAX_POOL_SIZE + 1))
        );
    }

    #[test]
    fn zero_acquire_timeout_is_rejected() {
        let mut config = with_url("postgres://localhost/decisions");
        config.acquire_timeout_secs = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidAcquireTimeout));
    }

    #[test]
    fn defaults_are_valid_for_a_cli_run() {
        let config = with_url("postgresql://localhost/decisions");
        assert!(config.validate().is_ok());
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(10));
        assert!(!config.run_migrations);
    }
}
