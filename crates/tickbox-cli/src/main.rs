//! Binary entry point.
//!
//! Parses arguments, builds a [`tickbox_cli::CliContext`], and hands
//! control to the matching command handler. `serve` is the exception:
//! the web adapter runs its own bootstrap against the same database
//! file.

use clap::Parser;

use tickbox_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // --db beats the platform default location
    let config = match cli.db.clone() {
        Some(db_path) => CliConfig { db_path },
        None => CliConfig::with_defaults()?,
    };
    let ctx = bootstrap(config.clone()).await?;

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        tickbox_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve { port, cors_origin } => {
            use tickbox_axum::{CorsConfig, ServerConfig, start_server};

            let cors = if cors_origin.is_empty() {
                CorsConfig::AllowAll
            } else {
                CorsConfig::AllowOrigins(cors_origin)
            };
            let server_config = ServerConfig {
                port,
                db_path: config.db_path.clone(),
                cors,
            };

            println!();
            println!("  tickbox web server starting...");
            println!();
            println!("  API: http://localhost:{port}/api/todos");
            println!();
            println!("  Press Ctrl+C to stop");
            println!();

            start_server(server_config).await?;
        }
        Commands::List { json } => {
            handlers::list::execute(&ctx, json).await?;
        }
        Commands::Add { name, done } => {
            handlers::add::execute(&ctx, &name, done).await?;
        }
        Commands::Done { id } => {
            handlers::done::execute(&ctx, id).await?;
        }
        Commands::Rm { id, force } => {
            handlers::rm::execute(&ctx, id, force).await?;
        }
        Commands::Clear { force } => {
            handlers::clear::execute(&ctx, force).await?;
        }
    }

    Ok(())
}
