//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("database.max_connections must be between 1 and 32, got {0}")]
    InvalidPoolSize(u32),

    #[error("database.acquire_timeout_secs must be positive")]
    InvalidAcquireTimeout,

    #[error("Share slug length must be between 8 and 12, got {0}")]
    InvalidSlugLength(usize),

    #[error("Share slug max_retries must be at least 1")]
    InvalidMaxRetries,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
