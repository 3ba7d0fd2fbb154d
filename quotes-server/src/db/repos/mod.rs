//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Reads go straight to the pool, one or two statements per call
//! - Writes open one transaction and commit it at the end
//! - Get-or-create relies on `ON CONFLICT` against a unique index

pub mod names;
pub mod quotes;

pub use names::{
    resolve_or_create, resolve_or_create_author, resolve_or_create_category, NameListing,
    NameRepo, NamedQuotes, QuotesPage,
};
pub use quotes::{build_update, quote_exists, Assignment, CreatedQuote, QuoteRepo};
