//! Application configuration module
//!
//! Configuration is read from environment variables (and `.env` when present)
//! with the `DECISION_HELPER` prefix; nested values are separated by `__`.
//! Every section has defaults, so an empty environment yields a usable
//! configuration backed by in-memory storage.
//!
//! # Example
//!
//! ```no_run
//! use decision_helper::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod drafts;
mod error;
mod sharing;
mod telemetry;

pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use drafts::DraftsConfig;
pub use error::{ConfigError, ValidationError};
pub use sharing::SharingConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Share slug length and retry bound
    #[serde(default)]
    pub sharing: SharingConfig,

    /// PostgreSQL connection; `None` means in-memory storage
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Draft file location
    #[serde(default)]
    pub drafts: DraftsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_HELPER__SHARING__SLUG_LENGTH=12` -> `sharing.slug_length = 12`
    /// - `DECISION_HELPER__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_HELPER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sharing.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.telemetry.validate()?;
        Ok(())
    }
}
