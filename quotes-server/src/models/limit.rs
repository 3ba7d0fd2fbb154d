//! Row limits for listing endpoints

use super::ValidationError;

/// Default limit for `/quotes/random`
pub const DEFAULT_RANDOM_LIMIT: i64 = 10;

/// Default limit for every other listing endpoint
pub const DEFAULT_LISTING_LIMIT: i64 = 5;

/// Caller-supplied cap on returned rows.
///
/// Always non-negative so it can be bound straight into a `LIMIT` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(i64);

impl Limit {
    /// Create a limit, rejecting negative values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(Self::invalid());
        }
        Ok(Self(value))
    }

    /// Parse the raw `limit` query value, falling back to `default` when absent.
    ///
    /// # Example
    /// ```
    /// use quotes_server::models::Limit;
    ///
    /// assert_eq!(Limit::parse(None, 5).unwrap().get(), 5);
    /// assert_eq!(Limit::parse(Some("3"), 5).unwrap().get(), 3);
    /// assert!(Limit::parse(Some("three"), 5).is_err());
    /// ```
    pub fn parse(raw: Option<&str>, default: i64) -> Result<Self, ValidationError> {
        match raw {
            None => Self::new(default),
            Some(s) => s.trim().parse::<i64>().map_err(|_| Self::invalid()).and_then(Self::new),
        }
    }

    /// Get the value for binding into SQL.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Get the value as a `usize` for in-memory truncation.
    pub fn as_usize(&self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }

    fn invalid() -> ValidationError {
        ValidationError::InvalidFormat {
            field: "limit",
            reason: "must be a non-negative integer",
        }
    }
}
