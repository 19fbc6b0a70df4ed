//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;
pub mod root;

use axum::Router;
use axum::routing::{get, post};

/// Build the API routes.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root::read))
        .route("/items/", post(items::create))
        .route("/items", post(items::redirect_to_collection))
        .route("/items/{item_id}", get(items::read))
        .route(
            "/items/{item_id}/",
            get(items::redirect_without_trailing_slash),
        )
}
