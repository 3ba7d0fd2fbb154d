//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use quotes_server::db::{create_pool, schema};

use crate::config::CONNECTION_STRING_ENV;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Postgres connection string
    #[arg(long, env = "CONNECTION_STRING", hide_env_values = true)]
    pub connection_string: Option<String>,
}

/// Create tables and indexes that don't exist yet
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let connection_string = require_connection_string(args.connection_string)?;

    let pool = create_pool(&connection_string)
        .await
        .context("Failed to create database pool")?;

    schema::ensure(&pool)
        .await
        .context("Failed to bootstrap schema")?;

    println!("Schema ready");
    Ok(())
}

pub(crate) fn require_connection_string(value: Option<String>) -> Result<String> {
    value.with_context(|| {
        format!(
            "{CONNECTION_STRING_ENV} not set. Set via --connection-string, the environment, or ./.env"
        )
    })
}
