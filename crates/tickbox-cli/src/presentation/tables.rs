//! Cell helpers for the `list` table.

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
///
/// Length is counted in characters rather than bytes so multi-byte
/// names never split a UTF-8 sequence.
///
/// # Examples
///
/// ```rust
/// use tickbox_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("groceries", 20), "groceries");
/// assert_eq!(truncate_string("water the plants", 9), "water ...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Render a completion flag as a checkbox cell.
pub fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Format an optional cell value, substituting a placeholder when absent.
pub fn cell_or<T: std::fmt::Display>(value: Option<&T>, placeholder: &str) -> String {
    value.map_or_else(|| placeholder.to_string(), ToString::to_string)
}

/// Rule a line of dashes under the table header.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}
