#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Adapters import from the crate root rather than the submodules
pub use domain::{TodoItem, TodoRecord, item_to_record, record_to_item};
pub use ports::{CoreError, RepositoryError, TodoRepository};
pub use services::{TodoDataService, TodoService};
