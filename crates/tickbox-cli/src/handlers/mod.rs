//! One module per subcommand.
//!
//! Handlers share the shape `pub async fn execute(ctx: &CliContext, ...)
//! -> Result<()>`: take arguments, call the todo service, print the
//! outcome. SQL and pool handling never appear on this side of the
//! service boundary.

pub mod add;
pub mod clear;
pub mod done;
pub mod list;
pub mod rm;
