//! `SQLite` implementation of the `TodoRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use tickbox_core::{RepositoryError, TodoRecord, TodoRepository};

use super::row_mappers::{TODO_SELECT_COLUMNS, row_to_record};

/// `SQLite` implementation of the `TodoRepository` trait.
///
/// Wraps a connection pool; every trait method runs its SQL against
/// that pool.
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new `SQLite` todo repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> Result<Vec<TodoRecord>, RepositoryError> {
        let query = format!("SELECT {} FROM todos", TODO_SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError> {
        let query = format!("SELECT {} FROM todos WHERE id = ?", TODO_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn save(&self, record: &TodoRecord) -> Result<TodoRecord, RepositoryError> {
        // Rows always carry a creation timestamp even when the caller
        // left it out
        let created = record.created.unwrap_or_else(|| Utc::now().naive_utc());

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let id = match record.id {
            None => {
                let result =
                    sqlx::query("INSERT INTO todos (name, completed, created) VALUES (?, ?, ?)")
                        .bind(&record.name)
                        .bind(record.completed)
                        .bind(created)
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

                result.last_insert_rowid()
            }
            Some(id) => {
                let result =
                    sqlx::query("UPDATE todos SET name = ?, completed = ?, created = ? WHERE id = ?")
                        .bind(&record.name)
                        .bind(record.completed)
                        .bind(created)
                        .bind(id)
                        .execute(&mut *tx)
                        .await
                        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

                // Dropping the transaction rolls back, so nothing is
                // ever inserted on this path
                if result.rows_affected() == 0 {
                    return Err(RepositoryError::NotFound(id));
                }

                id
            }
        };

        let query = format!("SELECT {} FROM todos WHERE id = ?", TODO_SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row_to_record(&row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM todos")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}
