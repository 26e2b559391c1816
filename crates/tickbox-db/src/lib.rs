#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Flat re-exports so adapters need only one `use` line
pub use factory::SqliteFactory;
pub use repositories::SqliteTodoRepository;
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
