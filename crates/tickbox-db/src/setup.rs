//! Pool construction and schema bootstrap.
//!
//! Entry points resolve a database path, then call [`setup_database`] to
//! obtain a ready pool with the schema in place.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

/// Open the `SQLite` database at `db_path` and ensure the schema exists.
///
/// Both the database file and its parent directory are created when
/// missing, so a fresh install works from an empty data dir.
///
/// # Errors
///
/// Fails when the file cannot be opened or created, or when the schema
/// statement is rejected.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Open a fresh in-memory database carrying the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Create the `todos` table when missing. Safe to run repeatedly.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT keeps ids unique and monotonically increasing, and
    // never reuses an id after its row is deleted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            created TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
