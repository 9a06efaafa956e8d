/**
 * Server Configuration
 *
 * This module opens the SQLite datastore and brings its schema up to date.
 *
 * # Configuration Sources
 *
 * The database URL comes from `GatewayConfig::database_url`, which in turn
 * reads `DATABASE_URL` (default `sqlite://kdt.db?mode=rwc`).
 *
 * # Error Handling
 *
 * The datastore is required: a connection or migration failure aborts
 * startup with a `StartupError` instead of serving requests that would all
 * fail.
 */

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::shared::config::{ConfigError, GatewayConfig};

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] MigrateError),
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool for `url` and run the embedded migrations
///
/// An in-memory database lives only as long as its connection, so such
/// URLs get a single connection that is never recycled.
///
/// # Example
///
/// ```rust,no_run
/// use kdt_server::backend::server::config::connect_database;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = connect_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect_database(url: &str) -> Result<SqlitePool, StartupError> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Load the database named by the configuration
pub async fn load_database(config: &GatewayConfig) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");
    let pool = connect_database(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to open database {}: {}", config.database_url, e);
        e
    })?;
    tracing::info!("Database ready");
    Ok(pool)
}

/// Apply every pending migration under `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
