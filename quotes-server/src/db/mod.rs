//! Database layer - connection pool, schema, repositories, and the store seam
//!
//! # Design Principles
//!
//! - Connection pool, connections scoped to one operation
//! - Every user-supplied value is a bound parameter
//! - Rely on unique indexes for get-or-create, no check-then-insert races
//! - One transaction per write request

pub mod error;
#[cfg(test)]
pub(crate) mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{PgStore, QuoteStore};
