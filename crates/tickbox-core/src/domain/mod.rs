//! Domain types for todo items.
//!
//! Nothing in here knows about the database, HTTP, or the terminal.

pub mod todo;

pub use todo::{TodoItem, TodoRecord, item_to_record, record_to_item};
