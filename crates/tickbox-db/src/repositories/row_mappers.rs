//! Decoding `SQLite` rows into domain records.

use chrono::NaiveDateTime;
use sqlx::Row;

use tickbox_core::{RepositoryError, TodoRecord};

/// Shared SELECT column list for todo queries.
pub const TODO_SELECT_COLUMNS: &str = "id, name, completed, created";

/// Parse a database row into a `TodoRecord`.
pub fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<TodoRecord, RepositoryError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let completed: bool = row
        .try_get("completed")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let created: NaiveDateTime = row
        .try_get("created")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(TodoRecord {
        id: Some(id),
        name,
        completed,
        created: Some(created),
    })
}
