//! The store seam between HTTP handlers and the database
//!
//! Handlers only see [`QuoteStore`]. Production wires in [`PgStore`]; tests
//! substitute an isolated in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CreatedQuote, NameListing, NameRepo, NamedQuotes, QuoteRepo, QuotesPage};
use super::DbError;
use crate::models::{Entity, Limit, NewQuote, QuotePatch, QuoteView};

/// Every store operation the HTTP layer needs
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Up to `limit` quotes in random order.
    async fn random_quotes(&self, limit: Limit) -> Result<Vec<QuoteView>, DbError>;

    /// One quote by id.
    async fn quote(&self, id: i32) -> Result<Option<QuoteView>, DbError>;

    /// Author or category names, alphabetical, with the total row count.
    async fn names(&self, entity: Entity, limit: Limit) -> Result<NameListing, DbError>;

    /// Quotes for a case-insensitive author or category name.
    async fn quotes_by_name(
        &self,
        entity: Entity,
        name: &str,
        limit: Limit,
    ) -> Result<QuotesPage, DbError>;

    /// Quotes for an author or category id; `None` if the id is unknown.
    async fn quotes_by_id(
        &self,
        entity: Entity,
        id: i32,
        limit: Limit,
    ) -> Result<Option<NamedQuotes>, DbError>;

    /// Insert a quote, creating its author and category as needed.
    async fn create_quote(&self, quote: NewQuote) -> Result<CreatedQuote, DbError>;

    /// Partially update a quote.
    async fn update_quote(&self, id: i32, patch: QuotePatch) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuoteStore for PgStore {
    async fn random_quotes(&self, limit: Limit) -> Result<Vec<QuoteView>, DbError> {
        QuoteRepo::new(&self.pool).random(limit).await
    }

    async fn quote(&self, id: i32) -> Result<Option<QuoteView>, DbError> {
        QuoteRepo::new(&self.pool).get(id).await
    }

    async fn names(&self, entity: Entity, limit: Limit) -> Result<NameListing, DbError> {
        NameRepo::new(&self.pool, entity).list(limit).await
    }

    async fn quotes_by_name(
        &self,
        entity: Entity,
        name: &str,
        limit: Limit,
    ) -> Result<QuotesPage, DbError> {
        NameRepo::new(&self.pool, entity).quotes_by_name(name, limit).await
    }

    async fn quotes_by_id(
        &self,
        entity: Entity,
        id: i32,
        limit: Limit,
    ) -> Result<Option<NamedQuotes>, DbError> {
        NameRepo::new(&self.pool, entity).quotes_by_id(id, limit).await
    }

    async fn create_quote(&self, quote: NewQuote) -> Result<CreatedQuote, DbError> {
        QuoteRepo::new(&self.pool).create(quote).await
    }

    async fn update_quote(&self, id: i32, patch: QuotePatch) -> Result<(), DbError> {
        QuoteRepo::new(&self.pool).update(id, patch).await
    }
}
