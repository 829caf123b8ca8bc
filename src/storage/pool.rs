//! Database connection pool management.
//!
//! Seed dumps only read, so the pool is opened on an existing database file
//! in read-only mode and never creates one.

use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Shared handle to the SQLite pool.
pub type DbPool = Arc<SqlitePool>;

/// Opens a read-only connection pool on an existing database.
///
/// # Errors
///
/// Returns `DatabaseError::FileNotFound` when `db_path` does not exist, or
/// `DatabaseError::SqlError` when SQLite refuses the connection.
pub async fn init_db_pool_with_path(db_path: &std::path::Path) -> Result<DbPool, DatabaseError> {
    if !db_path.is_file() {
        error!("Database file not found: {}", db_path.display());
        return Err(DatabaseError::FileNotFound(
            db_path.to_string_lossy().to_string(),
        ));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        error!("Failed to connect to database: {e}");
        DatabaseError::SqlError(e)
    })?;

    info!("Opened database {}", db_path.display());
    Ok(Arc::new(pool))
}
