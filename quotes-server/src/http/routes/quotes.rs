//! Quote endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::RandomLimit;
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{QuoteId, QuoteQuery, ValidLimit};
use crate::http::server::AppState;
use crate::models::{NewQuote, QuotePatch, QuoteView};

/// Random quotes response
#[derive(Serialize)]
pub struct RandomQuotesResponse {
    #[serde(rename = "randomQuotes")]
    pub random_quotes: Vec<QuoteView>,
}

/// Created quote response
#[derive(Serialize)]
pub struct CreatedQuoteResponse {
    pub message: &'static str,
    #[serde(rename = "quoteID")]
    pub quote_id: i32,
    pub author: String,
    pub quote: String,
    pub category: String,
}

/// Updated quote response
#[derive(Serialize)]
pub struct UpdatedQuoteResponse {
    pub message: &'static str,
    #[serde(rename = "quoteID")]
    pub quote_id: i32,
}

/// GET /quotes/random - random quotes with author and category
async fn random_quotes(
    State(state): State<Arc<AppState>>,
    ValidLimit(limit): RandomLimit,
) -> Result<Json<RandomQuotesResponse>, ApiError> {
    let random_quotes = state.store.random_quotes(limit).await?;
    Ok(Json(RandomQuotesResponse { random_quotes }))
}

/// GET /quotes/{id} - a single quote
async fn get_quote(
    State(state): State<Arc<AppState>>,
    QuoteId(id): QuoteId,
) -> Result<Json<QuoteView>, ApiError> {
    state
        .store
        .quote(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Quote not found"))
}

/// POST /quotes - create a quote, creating its author and category as needed
async fn create_quote(
    State(state): State<Arc<AppState>>,
    QuoteQuery(params): QuoteQuery,
) -> Result<(StatusCode, Json<CreatedQuoteResponse>), ApiError> {
    let new = NewQuote::from_params(params)?;
    let created = state.store.create_quote(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedQuoteResponse {
            message: "Quote created successfully",
            quote_id: created.id,
            author: created.author,
            quote: created.text,
            category: created.category,
        }),
    ))
}

/// PATCH /quotes/{id} - update any subset of text, author, category
async fn update_quote(
    State(state): State<Arc<AppState>>,
    QuoteId(id): QuoteId,
    QuoteQuery(params): QuoteQuery,
) -> Result<Json<UpdatedQuoteResponse>, ApiError> {
    let patch = QuotePatch::from_params(params)?;

    state
        .store
        .update_quote(id, patch)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::not_found("Quote was not found"),
            e => e.into(),
        })?;

    Ok(Json(UpdatedQuoteResponse {
        message: "Quote updated successfully",
        quote_id: id,
    }))
}

/// Quote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", post(create_quote))
        .route("/quotes/random", get(random_quotes))
        .route("/quotes/{id}", get(get_quote).patch(update_quote))
}
