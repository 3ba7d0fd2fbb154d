//! quotes-server: HTTP API over quotes, authors, and categories
//!
//! Lookup endpoints (random, by id, by author/category, name listings) and
//! mutation endpoints (create, partial update) over a Postgres store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, PgStore, QuoteStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
