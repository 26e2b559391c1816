//! Traits the core expects its adapters to implement.
//!
//! Signatures here use domain types only. `sqlx` rows, HTTP types, and
//! other adapter details stay on the implementing side.

pub mod todo_repository;

use thiserror::Error;

pub use todo_repository::TodoRepository;

/// Failures reported by storage implementations.
///
/// Repositories translate their backend errors into this type so the
/// services never see `sqlx` directly.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the lookup. Carries the id that missed so callers
    /// can phrase their own message.
    #[error("No row with id {0}")]
    NotFound(i64),

    /// The backend itself failed (I/O, constraint, connection).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error surface of the todo service.
///
/// Adapters translate these into their own vocabulary: the web adapter
/// maps [`CoreError::NotFound`] to a 404 response, the CLI prints it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested todo does not exist. Carries the client-facing
    /// message verbatim.
    #[error("{0}")]
    NotFound(String),

    /// The storage layer failed underneath the service.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// The not-found error for `id`, with the message clients see.
    ///
    /// Every adapter surfaces this one wording, so it is built in exactly
    /// one place.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound(format!("Todo ({id}) is not found."))
    }
}
