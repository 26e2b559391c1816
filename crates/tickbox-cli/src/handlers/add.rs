//! `add` subcommand.

use anyhow::Result;
use chrono::Utc;

use tickbox_core::TodoItem;

use crate::bootstrap::CliContext;
use crate::presentation::{TodoSummaryOpts, display_todo_summary};

/// Create a todo named `name` and print a summary of the saved row.
pub async fn execute(ctx: &CliContext, name: &str, done: bool) -> Result<()> {
    let item = TodoItem {
        id: None,
        name: name.to_string(),
        completed: done,
        created: Some(Utc::now().naive_utc()),
    };

    let saved = ctx.todos.create(item).await?;

    display_todo_summary(&saved, TodoSummaryOpts::with_title("Todo created:"));

    Ok(())
}
