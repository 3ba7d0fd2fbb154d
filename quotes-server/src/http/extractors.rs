//! Custom Axum extractors
//!
//! Rejections become [`ApiError`]s so malformed input still gets a JSON
//! `error` body.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{Limit, QuoteParams, Subject, ValidationError};

#[derive(Deserialize)]
struct LimitParams {
    limit: Option<String>,
}

/// Extract and validate `?limit=`, defaulting to `DEFAULT` when absent
pub struct ValidLimit<const DEFAULT: i64>(pub Limit);

impl<S, const DEFAULT: i64> FromRequestParts<S> for ValidLimit<DEFAULT>
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<LimitParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "limit",
                    reason: "must be a non-negative integer",
                })
            })?;

        let limit = Limit::parse(params.limit.as_deref(), DEFAULT)?;
        Ok(Self(limit))
    }
}

/// Extract an integer quote id from path
pub struct QuoteId(pub i32);

impl<S> FromRequestParts<S> for QuoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let id = id.parse::<i32>().map_err(|_| invalid_id())?;
        Ok(Self(id))
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

/// Extract an author/category path segment as an id or a name
pub struct SubjectPath(pub Subject);

impl<S> FromRequestParts<S> for SubjectPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "name",
                    reason: "must be a name or an integer id",
                })
            })?;

        Ok(Self(Subject::parse(&segment)))
    }
}

/// Extract `?quote=&author=&category=`
pub struct QuoteQuery(pub QuoteParams);

impl<S> FromRequestParts<S> for QuoteQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<QuoteParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "query",
                    reason: "malformed query string",
                })
            })?;

        Ok(Self(params))
    }
}
