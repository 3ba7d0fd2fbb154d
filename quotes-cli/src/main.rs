//! quotes CLI - runs the quotes HTTP API
//!
//! Subcommands:
//! - `serve`: start the HTTP server (bootstraps the schema first)
//! - `init-db`: create tables and indexes, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "quotes",
    author,
    version,
    about = "HTTP API over quotes, authors, and categories"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the quotes schema if it doesn't exist
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads `env = "CONNECTION_STRING"`
    let dotenv_path = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    match dotenv_path {
        Some(path) => tracing::debug!("Loaded .env from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment variables only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
