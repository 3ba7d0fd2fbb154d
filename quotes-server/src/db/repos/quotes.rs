//! Quote repository
//!
//! Handles quote reads and the two write paths:
//! - create: duplicate check, get-or-create author/category, insert (one transaction)
//! - update: existence check, resolve names, single bound UPDATE (one transaction)

use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::names::{resolve_or_create_author, resolve_or_create_category};
use crate::db::DbError;
use crate::models::{Limit, NewQuote, QuotePatch, QuoteView};

/// A freshly inserted quote, echoed back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuote {
    pub id: i32,
    pub text: String,
    pub author: String,
    pub category: String,
}

/// One `column = $n` pair of a partial UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Text(String),
    AuthorId(i32),
    CategoryId(i32),
}

impl Assignment {
    fn column(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::AuthorId(_) => "authorID",
            Self::CategoryId(_) => "categoryID",
        }
    }
}

const SELECT_QUOTE_VIEW: &str = r#"
    SELECT q.text AS quote, a.name AS author, c.name AS category
    FROM quotes q
    JOIN authors a ON a.id = q.authorID
    JOIN categories c ON c.id = q.categoryID
"#;

/// Quote repository
pub struct QuoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Up to `limit` quotes in random order.
    pub async fn random(&self, limit: Limit) -> Result<Vec<QuoteView>, DbError> {
        let quotes = sqlx::query_as::<_, QuoteView>(&format!(
            "{SELECT_QUOTE_VIEW} ORDER BY RANDOM() LIMIT $1"
        ))
        .bind(limit.get())
        .fetch_all(self.pool)
        .await?;

        Ok(quotes)
    }

    /// A single quote with its author and category names.
    pub async fn get(&self, id: i32) -> Result<Option<QuoteView>, DbError> {
        let quote = sqlx::query_as::<_, QuoteView>(&format!("{SELECT_QUOTE_VIEW} WHERE q.id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(quote)
    }

    /// Create a quote, auto-creating its author and category (atomic).
    ///
    /// Returns [`DbError::DuplicateQuote`] when the text already exists,
    /// whether found up front or raised by the unique index at insert time.
    pub async fn create(&self, new: NewQuote) -> Result<CreatedQuote, DbError> {
        let mut tx = self.pool.begin().await?;

        if let Some(quote_id) = quote_exists(&mut tx, &new.text, None).await? {
            return Err(DbError::DuplicateQuote {
                quote_id,
                quote: new.text,
            });
        }

        let author_id = resolve_or_create_author(&mut tx, &new.author).await?;
        let category_id = resolve_or_create_category(&mut tx, &new.category).await?;

        let inserted: Result<i32, DbError> = sqlx::query_scalar(
            r#"
            INSERT INTO quotes (text, authorID, categoryID)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new.text)
        .bind(author_id)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::from);

        let id = match inserted {
            Ok(id) => id,
            Err(e) if e.is_unique_violation() => {
                // Lost a race with a concurrent insert of the same text.
                drop(tx);
                return Err(self.duplicate_of(new.text).await);
            }
            Err(e) => return Err(e),
        };

        tx.commit().await?;
        tracing::info!(quote_id = id, author_id, category_id, "quote created");

        Ok(CreatedQuote {
            id,
            text: new.text,
            author: new.author,
            category: new.category,
        })
    }

    /// Apply a partial update (atomic).
    ///
    /// Order matters: a missing quote is reported before an empty patch.
    pub async fn update(&self, id: i32, patch: QuotePatch) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM quotes WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if !exists.0 {
            return Err(DbError::NotFound {
                resource: "quote",
                id: id.to_string(),
            });
        }

        if let Some(text) = &patch.text {
            if let Some(quote_id) = quote_exists(&mut tx, text, Some(id)).await? {
                return Err(DbError::DuplicateQuote {
                    quote_id,
                    quote: text.clone(),
                });
            }
        }

        let mut assignments = Vec::new();
        if let Some(text) = patch.text.clone() {
            assignments.push(Assignment::Text(text));
        }
        if let Some(author) = &patch.author {
            assignments.push(Assignment::AuthorId(
                resolve_or_create_author(&mut tx, author).await?,
            ));
        }
        if let Some(category) = &patch.category {
            assignments.push(Assignment::CategoryId(
                resolve_or_create_category(&mut tx, category).await?,
            ));
        }

        let Some(mut query) = build_update(id, assignments) else {
            return Err(crate::models::ValidationError::NoChanges.into());
        };

        let applied = query.build().execute(&mut *tx).await.map_err(DbError::from);
        match applied {
            Ok(_) => {}
            Err(e) if e.is_unique_violation() => {
                drop(tx);
                let text = patch.text.unwrap_or_default();
                return Err(self.duplicate_of(text).await);
            }
            Err(e) => return Err(e),
        }

        tx.commit().await?;
        tracing::info!(quote_id = id, "quote updated");
        Ok(())
    }

    /// Build the duplicate error for `text` after a unique violation,
    /// looking the winner up outside the aborted transaction.
    async fn duplicate_of(&self, text: String) -> DbError {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(e) => return e.into(),
        };

        match quote_exists(&mut conn, &text, None).await {
            Ok(Some(quote_id)) => DbError::DuplicateQuote { quote_id, quote: text },
            Ok(None) => DbError::Sqlx(sqlx::Error::RowNotFound),
            Err(e) => e,
        }
    }
}

/// Id of a quote with this exact text (case-insensitive), optionally
/// ignoring one quote id.
pub async fn quote_exists(
    conn: &mut PgConnection,
    text: &str,
    excluding: Option<i32>,
) -> Result<Option<i32>, DbError> {
    let id = sqlx::query_scalar(
        r#"
        SELECT id FROM quotes
        WHERE LOWER(text) = LOWER($1)
          AND ($2::int IS NULL OR id <> $2)
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(text)
    .bind(excluding)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(id)
}

/// Build `UPDATE quotes SET .. WHERE id = ..` from the given assignments,
/// in order, every value bound.
///
/// Returns `None` when there is nothing to set.
pub fn build_update(
    id: i32,
    assignments: Vec<Assignment>,
) -> Option<QueryBuilder<'static, Postgres>> {
    if assignments.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE quotes SET ");
    let mut set = query.separated(", ");
    for assignment in assignments {
        set.push(assignment.column());
        set.push_unseparated(" = ");
        match assignment {
            Assignment::Text(text) => set.push_bind_unseparated(text),
            Assignment::AuthorId(key) | Assignment::CategoryId(key) => {
                set.push_bind_unseparated(key)
            }
        };
    }
    query.push(" WHERE id = ");
    query.push_bind(id);

    Some(query)
}
