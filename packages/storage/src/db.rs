// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides the shared SQLite pool consumed by storage layers

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::{StorageConfig, StorageError, StorageResult};

/// Open (creating if necessary) the SQLite database described by `config`,
/// apply connection pragmas, and run pending migrations.
pub async fn connect(config: &StorageConfig) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = config.path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }

    let database_url = format!("sqlite:{}", config.path.display());

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(&database_url)
        .await
        .map_err(StorageError::Sqlx)?
    {
        debug!("Creating database at: {}", database_url);
        sqlx::Sqlite::create_database(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    debug!("Connecting to database: {}", database_url);

    // Configure connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.busy_timeout_seconds))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    // Configure SQLite settings (after pool creation, before migrations)
    if config.enable_wal {
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(StorageError::Migration)?;

    debug!("Database migrations completed");

    Ok(pool)
}
