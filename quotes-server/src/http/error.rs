//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with an `error` key and the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404), with the endpoint's message
    NotFound { message: &'static str },

    /// Quote text already taken (409)
    Conflict { quote_id: i32, quote: String },

    /// Request exceeded the configured timeout (408)
    Timeout,

    /// Database error (500, logged)
    Database(DbError),

    /// Middleware failure other than a timeout (500, logged)
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: &'static str) -> Self {
        Self::NotFound { message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                let mut body = json!({ "error": e.to_string() });
                if let ValidationError::MissingFields { fields } = e {
                    body["missingFields"] = json!(fields);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            Self::NotFound { message } => (StatusCode::NOT_FOUND, json!({ "error": message })),
            Self::Conflict { quote_id, quote } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Quote already exists",
                    "quoteID": quote_id,
                    "quote": quote
                }),
            ),
            Self::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                json!({ "error": "Request timed out" }),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
            Self::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: "Resource not found",
            },
            DbError::DuplicateQuote { quote_id, quote } => Self::Conflict { quote_id, quote },
            DbError::Validation(e) => Self::Validation(e),
            _ => Self::Database(e),
        }
    }
}
