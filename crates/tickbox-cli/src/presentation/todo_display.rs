//! Multi-line todo summaries printed after `add` and before `rm`.

use tickbox_core::TodoItem;

/// Controls which fields a summary prints.
#[derive(Debug, Clone, Default)]
pub struct TodoSummaryOpts<'a> {
    /// Heading printed above the field lines.
    pub title: Option<&'a str>,
    /// Include the `ID:` line.
    pub show_id: bool,
    /// Include the `Created:` line.
    pub show_created: bool,
}

impl<'a> TodoSummaryOpts<'a> {
    /// Summary with a heading and the id, nothing else.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            show_id: true,
            ..Default::default()
        }
    }

    /// Everything a user should see before confirming a delete.
    pub fn for_removal() -> Self {
        Self {
            title: Some("Todo to remove:"),
            show_id: true,
            show_created: true,
        }
    }
}

/// Print one todo as an indented field list.
///
/// # Examples
///
/// ```rust,ignore
/// use tickbox_cli::presentation::{TodoSummaryOpts, display_todo_summary};
///
/// display_todo_summary(&todo, TodoSummaryOpts::with_title("Todo created:"));
/// display_todo_summary(&todo, TodoSummaryOpts::for_removal());
/// ```
pub fn display_todo_summary(todo: &TodoItem, opts: TodoSummaryOpts) {
    if let Some(title) = opts.title {
        println!("{title}");
    }

    if opts.show_id
        && let Some(id) = todo.id
    {
        println!("  ID: {id}");
    }

    println!("  Name: {}", todo.name);
    println!(
        "  Status: {}",
        if todo.completed { "done" } else { "open" }
    );

    if opts.show_created
        && let Some(created) = todo.created
    {
        println!("  Created: {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
}
