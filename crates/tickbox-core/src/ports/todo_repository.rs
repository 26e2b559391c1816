//! The persistence port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::TodoRecord;

/// Storage operations on todo records.
///
/// CRUD only. The client-facing not-found message and id defaulting
/// belong in `TodoDataService`, not here, and no `sqlx` type may appear
/// in these signatures.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List all todo records in storage order.
    async fn find_all(&self) -> Result<Vec<TodoRecord>, RepositoryError>;

    /// Fetch a record by its primary key.
    ///
    /// Returns `Ok(None)` when no record has that id.
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError>;

    /// Persist a record and flush it, so the assigned id is visible to the
    /// caller as soon as this returns.
    ///
    /// A record with `id: None` is inserted and receives a fresh id. A
    /// record with `id: Some` fully replaces the stored row; replacing a
    /// row that does not exist returns `Err(RepositoryError::NotFound)`
    /// and never inserts. A missing `created` timestamp is filled with the
    /// current time.
    async fn save(&self, record: &TodoRecord) -> Result<TodoRecord, RepositoryError>;

    /// Delete a record by its primary key.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Delete every record. Succeeds even when storage is already empty.
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
