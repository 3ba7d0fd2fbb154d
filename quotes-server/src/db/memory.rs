//! In-memory [`QuoteStore`] for router tests
//!
//! Mirrors the Postgres semantics that handlers rely on: case-insensitive
//! names, get-or-create, duplicate detection, exists-before-empty ordering.
//! "Random" order is insertion order.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::repos::{CreatedQuote, NameListing, NamedQuotes, QuotesPage};
use super::store::QuoteStore;
use super::DbError;
use crate::models::{Entity, Limit, NewQuote, QuotePatch, QuoteView, ValidationError};

#[derive(Debug, Clone)]
struct QuoteRow {
    id: i32,
    text: String,
    author_id: i32,
    category_id: i32,
}

#[derive(Debug, Default)]
struct Inner {
    authors: Vec<(i32, String)>,
    categories: Vec<(i32, String)>,
    quotes: Vec<QuoteRow>,
    next_id: i32,
}

impl Inner {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn table(&self, entity: Entity) -> &Vec<(i32, String)> {
        match entity {
            Entity::Author => &self.authors,
            Entity::Category => &self.categories,
        }
    }

    fn name_of(&self, entity: Entity, id: i32) -> Option<String> {
        self.table(entity)
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, name)| name.clone())
    }

    fn resolve_or_create(&mut self, entity: Entity, name: &str) -> i32 {
        let wanted = name.to_lowercase();
        if let Some((id, _)) = self
            .table(entity)
            .iter()
            .find(|(_, n)| n.to_lowercase() == wanted)
        {
            return *id;
        }

        let id = self.next_id();
        let row = (id, name.to_owned());
        match entity {
            Entity::Author => self.authors.push(row),
            Entity::Category => self.categories.push(row),
        }
        id
    }

    fn quote_exists(&self, text: &str, excluding: Option<i32>) -> Option<i32> {
        let wanted = text.to_lowercase();
        self.quotes
            .iter()
            .find(|q| Some(q.id) != excluding && q.text.to_lowercase() == wanted)
            .map(|q| q.id)
    }

    fn view(&self, row: &QuoteRow) -> QuoteView {
        QuoteView {
            quote: row.text.clone(),
            author: self.name_of(Entity::Author, row.author_id).unwrap_or_default(),
            category: self.name_of(Entity::Category, row.category_id).unwrap_or_default(),
        }
    }

    fn page<'a>(&self, rows: impl Iterator<Item = &'a QuoteRow>, limit: Limit) -> QuotesPage {
        let texts: Vec<String> = rows.map(|q| q.text.clone()).collect();
        QuotesPage {
            total: texts.len() as i64,
            quotes: texts.into_iter().take(limit.as_usize()).collect(),
        }
    }
}

fn foreign_key(entity: Entity, row: &QuoteRow) -> i32 {
    match entity {
        Entity::Author => row.author_id,
        Entity::Category => row.category_id,
    }
}

/// Mutex-guarded vectors standing in for the three tables
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    failing: bool,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like a dropped connection.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// A store whose `random_quotes` answers only after `latency`.
    pub fn slow(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, DbError> {
        if self.failing {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(self.inner.lock().expect("memory store poisoned"))
    }

    /// Number of stored quotes, for assertions.
    pub fn quote_count(&self) -> usize {
        self.inner.lock().expect("memory store poisoned").quotes.len()
    }

    /// Get-or-create outside of a request, for test setup.
    pub fn resolve_or_create(&self, entity: Entity, name: &str) -> i32 {
        self.inner
            .lock()
            .expect("memory store poisoned")
            .resolve_or_create(entity, name)
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn random_quotes(&self, limit: Limit) -> Result<Vec<QuoteView>, DbError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let inner = self.lock()?;
        Ok(inner
            .quotes
            .iter()
            .take(limit.as_usize())
            .map(|q| inner.view(q))
            .collect())
    }

    async fn quote(&self, id: i32) -> Result<Option<QuoteView>, DbError> {
        let inner = self.lock()?;
        Ok(inner.quotes.iter().find(|q| q.id == id).map(|q| inner.view(q)))
    }

    async fn names(&self, entity: Entity, limit: Limit) -> Result<NameListing, DbError> {
        let inner = self.lock()?;
        let mut names: Vec<String> = inner.table(entity).iter().map(|(_, n)| n.clone()).collect();
        names.sort();
        Ok(NameListing {
            total: names.len() as i64,
            names: names.into_iter().take(limit.as_usize()).collect(),
        })
    }

    async fn quotes_by_name(
        &self,
        entity: Entity,
        name: &str,
        limit: Limit,
    ) -> Result<QuotesPage, DbError> {
        let inner = self.lock()?;
        let wanted = name.to_lowercase();
        let ids: Vec<i32> = inner
            .table(entity)
            .iter()
            .filter(|(_, n)| n.to_lowercase() == wanted)
            .map(|(id, _)| *id)
            .collect();
        Ok(inner.page(
            inner.quotes.iter().filter(|q| ids.contains(&foreign_key(entity, q))),
            limit,
        ))
    }

    async fn quotes_by_id(
        &self,
        entity: Entity,
        id: i32,
        limit: Limit,
    ) -> Result<Option<NamedQuotes>, DbError> {
        let inner = self.lock()?;
        let Some(name) = inner.name_of(entity, id) else {
            return Ok(None);
        };
        let page = inner.page(
            inner.quotes.iter().filter(|q| foreign_key(entity, q) == id),
            limit,
        );
        Ok(Some(NamedQuotes { name, page }))
    }

    async fn create_quote(&self, quote: NewQuote) -> Result<CreatedQuote, DbError> {
        let mut inner = self.lock()?;
        if let Some(quote_id) = inner.quote_exists(&quote.text, None) {
            return Err(DbError::DuplicateQuote {
                quote_id,
                quote: quote.text,
            });
        }

        let author_id = inner.resolve_or_create(Entity::Author, &quote.author);
        let category_id = inner.resolve_or_create(Entity::Category, &quote.category);
        let id = inner.next_id();
        inner.quotes.push(QuoteRow {
            id,
            text: quote.text.clone(),
            author_id,
            category_id,
        });

        Ok(CreatedQuote {
            id,
            text: quote.text,
            author: quote.author,
            category: quote.category,
        })
    }

    async fn update_quote(&self, id: i32, patch: QuotePatch) -> Result<(), DbError> {
        let mut inner = self.lock()?;
        let Some(index) = inner.quotes.iter().position(|q| q.id == id) else {
            return Err(DbError::NotFound {
                resource: "quote",
                id: id.to_string(),
            });
        };
        if patch.is_empty() {
            return Err(ValidationError::NoChanges.into());
        }
        if let Some(text) = &patch.text {
            if let Some(quote_id) = inner.quote_exists(text, Some(id)) {
                return Err(DbError::DuplicateQuote {
                    quote_id,
                    quote: text.clone(),
                });
            }
        }

        let author_id = patch
            .author
            .as_deref()
            .map(|name| inner.resolve_or_create(Entity::Author, name));
        let category_id = patch
            .category
            .as_deref()
            .map(|name| inner.resolve_or_create(Entity::Category, name));

        let row = &mut inner.quotes[index];
        if let Some(text) = patch.text {
            row.text = text;
        }
        if let Some(author_id) = author_id {
            row.author_id = author_id;
        }
        if let Some(category_id) = category_id {
            row.category_id = category_id;
        }
        Ok(())
    }
}
