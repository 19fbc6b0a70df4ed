//! JSON REST handlers for items.
//!
//! Nothing is looked up or stored: reads echo the requested id, creates echo
//! the submitted item once it passes the shape check.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use itemapi_domain::error::ValidationError;
use itemapi_domain::id::ItemId;
use itemapi_domain::item::Item;

use crate::error::ApiError;

/// Query string accepted by the read endpoint.
#[derive(Debug, Deserialize)]
pub struct ReadItemQuery {
    pub q: Option<String>,
}

/// Body returned by the read endpoint.
#[derive(Debug, Serialize)]
pub struct ItemLookup {
    pub item_id: ItemId,
    pub query: Option<String>,
}

/// Body returned by the create endpoint.
#[derive(Debug, Serialize)]
pub struct ItemCreated {
    pub status: &'static str,
    pub item: Item,
}

/// Possible responses from the read endpoint.
pub enum ReadResponse {
    Ok(Json<ItemLookup>),
}

impl IntoResponse for ReadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<ItemCreated>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /items/{item_id}`
pub async fn read(
    item_id: Result<Path<String>, PathRejection>,
    query: Result<Query<ReadItemQuery>, QueryRejection>,
) -> Result<ReadResponse, ApiError> {
    // An undecodable segment (e.g. invalid UTF-8) cannot be an integer either.
    let Path(item_id) = item_id.map_err(|_| {
        ApiError::path(ValidationError::InvalidType {
            field: "item_id",
            expected: "integer",
        })
    })?;
    let item_id: ItemId = item_id.parse().map_err(ApiError::path)?;
    let Query(ReadItemQuery { q }) = query?;
    Ok(ReadResponse::Ok(Json(ItemLookup { item_id, query: q })))
}

/// `POST /items/`
pub async fn create(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError> {
    let Json(document) = payload?;
    let item = Item::try_from(document).map_err(ApiError::body)?;
    tracing::debug!(item_id = %item.id, name = %item.name, "item accepted");
    Ok(CreateResponse::Ok(Json(ItemCreated { status: "ok", item })))
}

/// `POST /items`
///
/// `307` keeps the method and body, so the client re-sends the same create
/// to the canonical path.
pub async fn redirect_to_collection() -> Redirect {
    Redirect::temporary("/items/")
}

/// `GET /items/{item_id}/`
///
/// Drops the trailing slash and keeps the query string untouched.
pub async fn redirect_without_trailing_slash(uri: Uri) -> Redirect {
    let path = uri.path().trim_end_matches('/');
    let target = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    Redirect::temporary(&target)
}
