//! Composition root for the web adapter.
//!
//! Opens the database, wires the todo service, and starts the listener.
//! Nothing outside this module constructs infrastructure for the web
//! adapter.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use tickbox_core::paths::database_path;
use tickbox_core::services::TodoService;
use tickbox_db::{SqliteFactory, setup_database};

/// CORS policy applied to the `/api` routes.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Every origin may call the API (development default).
    #[default]
    AllowAll,
    /// Only the listed origins may call the API.
    AllowOrigins(Vec<String>),
}

/// Runtime settings for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// Database file backing the service.
    pub db_path: PathBuf,
    /// CORS policy.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Port 8080, database at the platform data path, CORS open.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: 8080,
            db_path: database_path()?,
            cors: CorsConfig::default(),
        })
    }

    /// Restrict CORS to the given origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Services shared by the request handlers.
pub struct ServerContext {
    /// The todo service.
    pub todos: Arc<dyn TodoService>,
}

/// Open the database and wire the todo service.
pub async fn bootstrap(config: &ServerConfig) -> Result<ServerContext> {
    tracing::info!(
        database_path = %config.db_path.display(),
        "database path resolved"
    );

    let pool = setup_database(&config.db_path).await?;
    let todos = SqliteFactory::build_service(pool);

    Ok(ServerContext { todos })
}

/// Bootstrap, then serve requests on `0.0.0.0:{port}` until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::build_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("tickbox web server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
