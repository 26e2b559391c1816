//! `SQLite` repository implementations.
//!
//! All SQL lives here; the pool and row types never leak through the
//! port signatures.

mod row_mappers;
mod sqlite_todo_repository;

pub use sqlite_todo_repository::SqliteTodoRepository;
