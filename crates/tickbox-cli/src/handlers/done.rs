//! `done` subcommand.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Mark the todo with `id` as completed.
///
/// Fetches the todo, flips its completed flag, and saves the update.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let mut todo = ctx.todos.find_by_id(id).await?;

    if todo.completed {
        println!("Todo {id} is already completed: {}", todo.name);
        return Ok(());
    }

    todo.completed = true;
    let updated = ctx.todos.update(todo).await?;

    println!("Completed todo {id}: {}", updated.name);

    Ok(())
}
