//! Domain models with validation at construction
//!
//! Query parameters are turned into these types before any store access.
//! Invalid input returns ValidationError, not panic.

pub mod entity;
pub mod limit;
pub mod quote;
pub mod text;
pub mod validation;

pub use entity::{Entity, Subject};
pub use limit::Limit;
pub use quote::{NewQuote, QuoteParams, QuotePatch, QuoteView};
pub use text::title_case;
pub use validation::ValidationError;
