//! Postgres pool construction
//!
//! The CLI builds one pool per process and hands it to [`PgStore`] and the
//! schema bootstrap.
//!
//! [`PgStore`]: super::PgStore

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used by [`create_pool`].
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/quotes").await?;
/// ```
pub async fn create_pool(connection_string: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(connection_string, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with at most `max_connections` open connections.
pub async fn create_pool_with_options(
    connection_string: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(connection_string)
        .await
}
