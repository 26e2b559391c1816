//! Filesystem path resolution for application data.

pub mod database;
pub mod error;
pub mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
