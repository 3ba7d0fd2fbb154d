//! Author and category repository
//!
//! Both tables have the same shape, so one repository serves either,
//! keyed by [`Entity`]. Table and column names come from `Entity`, never
//! from input.

use sqlx::{PgConnection, PgPool};

use crate::db::DbError;
use crate::models::{Entity, Limit};

/// Total row count plus the first `limit` names, alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameListing {
    pub total: i64,
    pub names: Vec<String>,
}

/// Total quote count for an author/category plus up to `limit` quote texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotesPage {
    pub total: i64,
    pub quotes: Vec<String>,
}

/// A [`QuotesPage`] together with the stored name of the row it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedQuotes {
    pub name: String,
    pub page: QuotesPage,
}

/// Name repository for one of the two name tables
pub struct NameRepo<'a> {
    pool: &'a PgPool,
    entity: Entity,
}

impl<'a> NameRepo<'a> {
    pub fn new(pool: &'a PgPool, entity: Entity) -> Self {
        Self { pool, entity }
    }

    /// Count all rows and list up to `limit` names ordered by name.
    pub async fn list(&self, limit: Limit) -> Result<NameListing, DbError> {
        let table = self.entity.table();

        let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.pool)
            .await?;

        if total == 0 {
            return Ok(NameListing::default());
        }

        let names: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT name FROM {table} ORDER BY name ASC LIMIT $1"
        ))
        .bind(limit.get())
        .fetch_all(self.pool)
        .await?;

        Ok(NameListing { total, names })
    }

    /// Stored name for an id.
    pub async fn find_name(&self, id: i32) -> Result<Option<String>, DbError> {
        let name = sqlx::query_scalar(&format!(
            "SELECT name FROM {} WHERE id = $1",
            self.entity.table()
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(name)
    }

    /// Quotes whose author/category name matches case-insensitively.
    pub async fn quotes_by_name(&self, name: &str, limit: Limit) -> Result<QuotesPage, DbError> {
        let table = self.entity.table();
        let column = self.entity.quote_column();

        let (total,): (i64,) = sqlx::query_as(&format!(
            r#"
            SELECT COUNT(*)
            FROM quotes q
            JOIN {table} n ON n.id = q.{column}
            WHERE LOWER(n.name) = LOWER($1)
            "#
        ))
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        if total == 0 {
            return Ok(QuotesPage::default());
        }

        let quotes: Vec<String> = sqlx::query_scalar(&format!(
            r#"
            SELECT q.text
            FROM quotes q
            JOIN {table} n ON n.id = q.{column}
            WHERE LOWER(n.name) = LOWER($1)
            ORDER BY q.id
            LIMIT $2
            "#
        ))
        .bind(name)
        .bind(limit.get())
        .fetch_all(self.pool)
        .await?;

        Ok(QuotesPage { total, quotes })
    }

    /// Quotes for the row with this id, or `None` if the row doesn't exist.
    pub async fn quotes_by_id(
        &self,
        id: i32,
        limit: Limit,
    ) -> Result<Option<NamedQuotes>, DbError> {
        let Some(name) = self.find_name(id).await? else {
            return Ok(None);
        };

        let column = self.entity.quote_column();

        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM quotes WHERE {column} = $1"))
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        let quotes: Vec<String> = if total == 0 {
            Vec::new()
        } else {
            sqlx::query_scalar(&format!(
                "SELECT text FROM quotes WHERE {column} = $1 ORDER BY id LIMIT $2"
            ))
            .bind(id)
            .bind(limit.get())
            .fetch_all(self.pool)
            .await?
        };

        Ok(Some(NamedQuotes {
            name,
            page: QuotesPage { total, quotes },
        }))
    }
}

/// Get-or-create a name row, matching case-insensitively.
///
/// An existing row (in any case) wins and keeps its stored spelling. A new
/// name is inserted through `ON CONFLICT` on the `LOWER(name)` unique index,
/// so two writers racing on the same new name both get the same id.
pub async fn resolve_or_create(
    conn: &mut PgConnection,
    entity: Entity,
    name: &str,
) -> Result<i32, DbError> {
    let table = entity.table();

    let existing: Option<i32> = sqlx::query_scalar(&format!(
        "SELECT id FROM {table} WHERE LOWER(name) = LOWER($1) ORDER BY id LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id: i32 = sqlx::query_scalar(&format!(
        r#"
        INSERT INTO {table} (name) VALUES ($1)
        ON CONFLICT ((LOWER(name))) DO UPDATE SET name = {table}.name
        RETURNING id
        "#
    ))
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!(table, id, "created name row");
    Ok(id)
}

/// Get-or-create an author id by name.
pub async fn resolve_or_create_author(conn: &mut PgConnection, name: &str) -> Result<i32, DbError> {
    resolve_or_create(conn, Entity::Author, name).await
}

/// Get-or-create a category id by name.
pub async fn resolve_or_create_category(
    conn: &mut PgConnection,
    name: &str,
) -> Result<i32, DbError> {
    resolve_or_create(conn, Entity::Category, name).await
}
