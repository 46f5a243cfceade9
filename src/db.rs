//! Database connection pool management

use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Settings;

/// Create a SQLite connection pool with foreign keys enforced
pub async fn create_pool(settings: &Settings) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(&settings.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(settings.database_max_connections.max(1))
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800));

    // Every in-memory connection is its own database, so keep exactly one alive forever
    if settings.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options
        .connect_with(connect_options)
        .await
        .context("Failed to open SQLite database")?;

    tracing::info!(
        max_connections = settings.database_max_connections,
        in_memory = settings.is_in_memory(),
        "Database connection pool established"
    );

    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}
