//! Interactive stdin prompts.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print `prompt` and read one trimmed line from stdin.
///
/// The prompt stays on the same line as the cursor.
///
/// # Errors
///
/// Fails when the prompt cannot be written or stdin is closed.
pub fn read_reply(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("could not flush prompt")?;

    let mut reply = String::new();
    io::stdin()
        .read_line(&mut reply)
        .context("could not read from stdin")?;

    Ok(reply.trim().to_string())
}

/// Ask a yes/no question, re-asking until the reply is recognizable.
///
/// Accepts `y`, `yes`, `n`, `no` in any case; an empty reply counts
/// as no.
///
/// # Errors
///
/// Fails when stdin is closed.
pub fn confirm(prompt: &str) -> Result<bool> {
    loop {
        let reply = read_reply(&format!("{prompt} (y/N)"))?.to_lowercase();
        match reply.as_str() {
            "y" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => eprintln!("Please answer 'y' or 'n'."),
        }
    }
}
