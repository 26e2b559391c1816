//! HTTP request handlers.
//!
//! Handlers are thin: extract, delegate to the todo service, convert
//! errors. No domain logic lives here.

pub mod todos;
