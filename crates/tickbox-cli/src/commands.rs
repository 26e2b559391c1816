//! Subcommand definitions.

use clap::Subcommand;

/// Operations the `tickbox` binary can run.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, env = "TICKBOX_PORT", default_value = "8080")]
        port: u16,

        /// Allow a specific CORS origin (repeatable; all origins when absent)
        #[arg(long = "cors-origin")]
        cors_origin: Vec<String>,
    },

    /// List all todos
    List {
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a new todo
    Add {
        /// Name of the todo
        name: String,

        /// Mark it completed immediately
        #[arg(long)]
        done: bool,
    },

    /// Mark a todo as completed
    Done {
        /// ID of the todo to complete
        id: i64,
    },

    /// Remove a todo
    Rm {
        /// ID of the todo to remove
        id: i64,

        /// Delete without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Remove every todo
    Clear {
        /// Delete without asking
        #[arg(short, long)]
        force: bool,
    },
}
