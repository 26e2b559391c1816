//! Service layer for todo operations.

pub mod todo_service;

pub use todo_service::{TodoDataService, TodoService};
