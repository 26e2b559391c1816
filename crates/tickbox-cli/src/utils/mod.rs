//! Small shared utilities for the CLI adapter.

pub mod input;
