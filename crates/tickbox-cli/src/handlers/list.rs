//! `list` subcommand.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{cell_or, checkbox, print_separator, truncate_string};

/// Print every todo as a table, or as a JSON array when `json` is set.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let todos = ctx.todos.find_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&todos)?);
        return Ok(());
    }

    if todos.is_empty() {
        println!("No todos found.");
        println!("Use 'tickbox add <name>' to add your first todo.");
        return Ok(());
    }

    println!("Found {} todo(s):\n", todos.len());

    println!("{:<5} {:<6} {:<40} Created", "ID", "Done", "Name");
    print_separator(75);

    for todo in todos {
        let created = todo
            .created
            .map(|c| c.format("%Y-%m-%d %H:%M:%S").to_string());

        println!(
            "{:<5} {:<6} {:<40} {}",
            cell_or(todo.id.as_ref(), "--"),
            checkbox(todo.completed),
            truncate_string(&todo.name, 39),
            cell_or(created.as_ref(), "--"),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_pass_through_untruncated() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_long_names_end_in_ellipsis() {
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_string("ääääääääää", 6), "äää...");
    }

    #[test]
    fn test_checkbox_cells() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }

    #[test]
    fn test_cell_or_some_and_none() {
        assert_eq!(cell_or(Some(&7), "--"), "7");
        assert_eq!(cell_or(None::<&i64>, "--"), "--");
    }
}
