//! Store-layer error type

use crate::models::ValidationError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Another quote already has this text (case-insensitive)
    #[error("quote already exists with id {quote_id}")]
    DuplicateQuote { quote_id: i32, quote: String },

    /// Input rejected after the store was consulted (e.g. empty update)
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DbError {
    /// True when the error is a unique-index violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }
}
