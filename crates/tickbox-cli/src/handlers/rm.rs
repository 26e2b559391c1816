//! `rm` subcommand.

use anyhow::Result;

use tickbox_core::CoreError;

use crate::bootstrap::CliContext;
use crate::presentation::{TodoSummaryOpts, display_todo_summary};
use crate::utils::input;

/// Delete the todo with `id`, prompting first unless `force` is set.
///
/// An unknown id is an error: the not-found message reaches stderr and
/// the process exits nonzero, same as `done`.
pub async fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    // Fetch first so the user sees what they are about to delete
    let todo = match ctx.todos.find_by_id(id).await {
        Ok(todo) => todo,
        Err(err) => {
            if matches!(err, CoreError::NotFound(_)) {
                eprintln!("Use 'tickbox list' to see available todos.");
            }
            return Err(err.into());
        }
    };

    if !force {
        display_todo_summary(&todo, TodoSummaryOpts::for_removal());
        println!();

        if !input::confirm("Are you sure you want to remove this todo?")? {
            println!("Nothing removed.");
            return Ok(());
        }
    }

    ctx.todos.delete(id).await?;
    println!("Todo '{}' (ID {id}) removed.", todo.name);

    Ok(())
}
