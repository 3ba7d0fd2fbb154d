//! Idempotent schema bootstrap
//!
//! Plain `IF NOT EXISTS` DDL, not versioned migrations. The unique
//! `LOWER(..)` indexes back the get-or-create upserts and duplicate-quote
//! detection.

use sqlx::PgPool;

use super::DbError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quotes (
        id SERIAL PRIMARY KEY,
        text TEXT NOT NULL,
        authorID INTEGER NOT NULL REFERENCES authors(id),
        categoryID INTEGER NOT NULL REFERENCES categories(id)
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS authors_name_lower_key ON authors (LOWER(name))",
    "CREATE UNIQUE INDEX IF NOT EXISTS categories_name_lower_key ON categories (LOWER(name))",
    "CREATE UNIQUE INDEX IF NOT EXISTS quotes_text_lower_key ON quotes (LOWER(text))",
    "CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes(authorID)",
    "CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes(categoryID)",
];

/// Create tables and indexes that don't exist yet.
pub async fn ensure(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring quotes schema...");

    for statement in STATEMENTS {
        sqlx::query(*statement).execute(pool).await?;
    }

    tracing::info!("Quotes schema ready");
    Ok(())
}
