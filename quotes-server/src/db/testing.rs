//! Database fixtures for `#[ignore = "requires database"]` tests
//!
//! Run with: CONNECTION_STRING=postgres://... cargo test -p quotes-server -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use super::schema;

fn connection_string() -> String {
    std::env::var("CONNECTION_STRING").expect("CONNECTION_STRING required")
}

fn nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

/// `label` plus a per-call suffix, for rows in the shared schema.
pub(crate) fn unique(label: &str) -> String {
    format!("{label} {}", nanos())
}

/// Pool on the shared database with the schema in place.
pub(crate) async fn shared_pool() -> PgPool {
    let pool = super::create_pool(&connection_string())
        .await
        .expect("pool creation failed");
    schema::ensure(&pool).await.expect("schema");
    pool
}

/// A private, empty copy of the schema.
///
/// Every pooled connection gets `search_path` set to a fresh Postgres
/// schema, so counts and orderings see only this test's rows.
pub(crate) struct IsolatedDb {
    pub pool: PgPool,
    name: String,
}

impl IsolatedDb {
    pub async fn new() -> Self {
        let url = connection_string();
        let name = format!("quotes_test_{}", nanos());

        let admin = super::create_pool_with_options(&url, 1)
            .await
            .expect("pool creation failed");
        sqlx::query(&format!("CREATE SCHEMA {name}"))
            .execute(&admin)
            .await
            .expect("create schema");
        admin.close().await;

        let search_path = format!("SET search_path TO {name}");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok::<_, sqlx::Error>(())
                })
            })
            .connect(&url)
            .await
            .expect("pool creation failed");
        schema::ensure(&pool).await.expect("schema");

        Self { pool, name }
    }

    /// Drop the schema and everything in it.
    pub async fn cleanup(self) {
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.name))
            .execute(&self.pool)
            .await
            .expect("drop schema");
        self.pool.close().await;
    }
}
