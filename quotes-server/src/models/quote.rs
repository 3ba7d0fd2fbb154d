//! Quote request and response shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Raw `quote` / `author` / `category` query parameters.
///
/// Shared by create (all required) and partial update (any subset).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteParams {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// A quote, joined with its author and category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct QuoteView {
    pub quote: String,
    pub author: String,
    pub category: String,
}

/// Validated create-quote input. All three fields are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
    pub category: String,
}

impl NewQuote {
    /// Validate create parameters.
    ///
    /// Blank values count as missing. The error lists every missing field
    /// in `quote, author, category` order.
    pub fn from_params(params: QuoteParams) -> Result<Self, ValidationError> {
        let text = present("quote", params.quote)?;
        let author = present("author", params.author)?;
        let category = present("category", params.category)?;

        match (text, author, category) {
            (Some(text), Some(author), Some(category)) => Ok(Self {
                text,
                author,
                category,
            }),
            (text, author, category) => {
                let fields = [
                    ("quote", text.is_none()),
                    ("author", author.is_none()),
                    ("category", category.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(ValidationError::MissingFields { fields })
            }
        }
    }
}

/// Partial update input. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePatch {
    pub text: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl QuotePatch {
    pub fn from_params(params: QuoteParams) -> Result<Self, ValidationError> {
        Ok(Self {
            text: present("quote", params.quote)?,
            author: present("author", params.author)?,
            category: present("category", params.category)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.author.is_none() && self.category.is_none()
    }
}

/// Trimmed value, or `None` when absent or blank.
///
/// Postgres text cannot hold NUL, so it is rejected here as bad input.
fn present(field: &'static str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(value) = value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
    else {
        return Ok(None);
    };

    if value.contains('\0') {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain NUL bytes",
        });
    }
    Ok(Some(value))
}
