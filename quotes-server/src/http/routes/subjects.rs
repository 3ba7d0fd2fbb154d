//! Author and category endpoints
//!
//! Authors and categories are served by the same handlers, parameterized
//! by [`Entity`]; only the JSON keys differ.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{Map, Value};

use super::ListingLimit;
use crate::http::error::ApiError;
use crate::http::extractors::{SubjectPath, ValidLimit};
use crate::http::server::AppState;
use crate::models::{title_case, Entity, Limit, Subject};

const QUOTES_NOT_FOUND: &str = "quotes not found!";

/// `{"total number of authors", "number of authors returned", "authors"}`,
/// or just `{"authors": []}` when the table is empty.
async fn list_names(
    state: &AppState,
    entity: Entity,
    limit: Limit,
) -> Result<Json<Value>, ApiError> {
    let listing = state.store.names(entity, limit).await?;
    let plural = entity.plural();

    let mut body = Map::new();
    if listing.total > 0 {
        body.insert(format!("total number of {plural}"), listing.total.into());
        body.insert(
            format!("number of {plural} returned"),
            listing.names.len().into(),
        );
    }
    body.insert(plural.to_owned(), listing.names.into());

    Ok(Json(Value::Object(body)))
}

/// Quotes for an author/category addressed by id or by name.
async fn quotes_for(
    state: &AppState,
    entity: Entity,
    subject: Subject,
    limit: Limit,
) -> Result<Json<Value>, ApiError> {
    let mut body = Map::new();

    let page = match subject {
        Subject::Name(name) => {
            let page = state.store.quotes_by_name(entity, &name, limit).await?;
            if page.total == 0 {
                return Err(ApiError::not_found(QUOTES_NOT_FOUND));
            }
            body.insert(entity.singular().to_owned(), title_case(&name).into());
            page
        }
        Subject::Id(id) => {
            let named = state
                .store
                .quotes_by_id(entity, id, limit)
                .await?
                .filter(|named| named.page.total > 0)
                .ok_or_else(|| ApiError::not_found(QUOTES_NOT_FOUND))?;
            body.insert(entity.id_key().to_owned(), id.into());
            body.insert(entity.name_key().to_owned(), named.name.into());
            named.page
        }
    };

    body.insert("total quotes available".to_owned(), page.total.into());
    body.insert(
        "amount of quotes returned".to_owned(),
        page.quotes.len().into(),
    );
    body.insert("quotes".to_owned(), page.quotes.into());

    Ok(Json(Value::Object(body)))
}

/// GET /authors
async fn list_authors(
    State(state): State<Arc<AppState>>,
    ValidLimit(limit): ListingLimit,
) -> Result<Json<Value>, ApiError> {
    list_names(&state, Entity::Author, limit).await
}

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
    ValidLimit(limit): ListingLimit,
) -> Result<Json<Value>, ApiError> {
    list_names(&state, Entity::Category, limit).await
}

/// GET /quotes/author/{name or id}
async fn quotes_by_author(
    State(state): State<Arc<AppState>>,
    SubjectPath(subject): SubjectPath,
    ValidLimit(limit): ListingLimit,
) -> Result<Json<Value>, ApiError> {
    quotes_for(&state, Entity::Author, subject, limit).await
}

/// GET /quotes/category/{name or id}
async fn quotes_by_category(
    State(state): State<Arc<AppState>>,
    SubjectPath(subject): SubjectPath,
    ValidLimit(limit): ListingLimit,
) -> Result<Json<Value>, ApiError> {
    quotes_for(&state, Entity::Category, subject, limit).await
}

/// Author and category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/categories", get(list_categories))
        .route("/quotes/author/{subject}", get(quotes_by_author))
        .route("/quotes/category/{subject}", get(quotes_by_category))
}
