//! Root clap parser.
//!
//! Global options live here; the subcommands and their arguments are
//! defined in [`crate::commands`].

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Top-level argument parser for the `tickbox` binary.
#[derive(Parser)]
#[command(name = "tickbox")]
#[command(about = "Manage todos from the terminal or over HTTP")]
#[command(version)]
pub struct Cli {
    /// Override the database file for this invocation
    #[arg(long = "db", global = true, env = "TICKBOX_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
