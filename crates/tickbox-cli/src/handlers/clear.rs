//! `clear` subcommand.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::utils::input;

/// Delete every todo after showing how many would go.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<()> {
    let todos = ctx.todos.find_all().await?;

    if todos.is_empty() {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !force && !input::confirm(&format!("Remove all {} todo(s)?", todos.len()))? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.todos.delete_all().await?;
    println!("Removed {} todo(s).", todos.len());

    Ok(())
}
