//! Construction helpers for `SQLite`-backed services.
//!
//! Adapters hand a pool to these helpers and get back a wired todo
//! service; nothing here carries domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use tickbox_core::services::{TodoDataService, TodoService};

use crate::repositories::SqliteTodoRepository;

/// Builds repositories and services over a `SQLite` pool.
pub struct SqliteFactory;

impl SqliteFactory {
    /// Create a todo repository from a pool.
    pub fn todo_repository(pool: SqlitePool) -> Arc<SqliteTodoRepository> {
        Arc::new(SqliteTodoRepository::new(pool))
    }

    /// Build a fully wired todo service from a pool obtained via
    /// `setup_database()`.
    ///
    /// Adapters should prefer this over naming concrete repository types.
    pub fn build_service(pool: SqlitePool) -> Arc<dyn TodoService> {
        Arc::new(TodoDataService::new(Self::todo_repository(pool)))
    }
}
