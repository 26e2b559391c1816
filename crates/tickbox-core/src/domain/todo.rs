//! Todo item types and conversions.
//!
//! `TodoItem` is the wire shape exchanged with adapters; `TodoRecord` is
//! the persisted form owned by repositories. The two conversions are pure
//! field-for-field copies so they can be tested in isolation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A todo item as exchanged with clients.
///
/// Equality is field-by-field; adapter tests rely on this when comparing
/// a stored item against one read back over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Storage-assigned identifier. `None` until the item is persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name. Free-form text, no validation applied.
    pub name: String,
    /// Whether the item has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp (local date-time, no timezone). Filled at save
    /// time when the client leaves it out.
    #[serde(default)]
    pub created: Option<NaiveDateTime>,
}

/// The persisted form of a todo item.
///
/// Same four fields as `TodoItem`; persisted records always carry `Some`
/// in both optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Primary key. `None` for records not yet inserted.
    pub id: Option<i64>,
    pub name: String,
    pub completed: bool,
    pub created: Option<NaiveDateTime>,
}

/// Convert a persisted record into its wire representation.
pub fn record_to_item(record: &TodoRecord) -> TodoItem {
    TodoItem {
        id: record.id,
        name: record.name.clone(),
        completed: record.completed,
        created: record.created,
    }
}

/// Convert a wire item into its persisted form.
pub fn item_to_record(item: &TodoItem) -> TodoRecord {
    TodoRecord {
        id: item.id,
        name: item.name.clone(),
        completed: item.completed,
        created: item.created,
    }
}
