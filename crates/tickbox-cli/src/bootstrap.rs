//! Composition root for the CLI adapter.
//!
//! The database pool is opened and the todo service wired here and
//! nowhere else. Command handlers receive the finished [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use tickbox_core::paths::database_path;
use tickbox_core::services::TodoService;
use tickbox_db::{SqliteFactory, setup_database};

/// Runtime settings for the CLI adapter.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `SQLite` database file backing the service.
    pub db_path: PathBuf,
}

impl CliConfig {
    /// Database at the platform data path.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            db_path: database_path()?,
        })
    }
}

/// Services handed to every command handler.
pub struct CliContext {
    /// The todo service.
    pub todos: Arc<dyn TodoService>,
}

/// Open the database and wire the todo service.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(db_path = %config.db_path.display(), "opening database");

    let pool = setup_database(&config.db_path).await?;
    let todos = SqliteFactory::build_service(pool);

    Ok(CliContext { todos })
}
