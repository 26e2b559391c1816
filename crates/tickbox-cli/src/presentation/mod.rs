//! Terminal formatting helpers shared by the command handlers.
//!
//! Everything here renders values it is handed. Nothing in this module
//! calls the service or reshapes domain data.

pub mod tables;
pub mod todo_display;

pub use tables::{cell_or, checkbox, print_separator, truncate_string};
pub use todo_display::{TodoSummaryOpts, display_todo_summary};
