//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank
    MissingFields { fields: Vec<&'static str> },

    /// String doesn't match required format (e.g., integer)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Partial update carried no fields
    NoChanges,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { .. } => write!(f, "Missing required fields"),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::NoChanges => write!(f, "No fields provided to update"),
        }
    }
}

impl std::error::Error for ValidationError {}
