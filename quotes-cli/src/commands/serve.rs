//! HTTP server command
//!
//! Connects to Postgres, bootstraps the schema, and serves the quotes API
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quotes_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, schema};
use quotes_server::{run_server, AppState, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Postgres connection string
    #[arg(long, env = "CONNECTION_STRING", hide_env_values = true)]
    pub connection_string: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Don't create missing tables and indexes at startup
    #[arg(long)]
    pub skip_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let connection_string = super::init_db::require_connection_string(args.connection_string)?;

    let pool = create_pool_with_options(&connection_string, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_schema {
        tracing::info!("Skipping schema bootstrap");
    } else {
        schema::ensure(&pool)
            .await
            .context("Failed to bootstrap schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout),
    };

    tracing::info!(
        bind = %config.bind_addr,
        max_connections = args.max_connections,
        timeout_secs = args.request_timeout,
        "Starting quotes server"
    );

    run_server(AppState::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
