//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresDecisionRepository` - Saved decisions with a unique share slug
//! - `connect` - Pool construction from `DatabaseConfig`

mod decision_repository;

pub use decision_repository::PostgresDecisionRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool and applies pending migrations when enabled.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    Ok(pool)
}
