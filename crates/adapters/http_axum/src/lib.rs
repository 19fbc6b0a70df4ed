//! # itemapi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **Item JSON API** (`/`, `/items/{item_id}`, `/items/`)
//! - Turn malformed input into structured `422` client errors naming the
//!   offending field
//! - Apply the cross-origin policy and per-request tracing
//!
//! ## Dependency rule
//! Depends on `itemapi-domain` for the request/response model. Never leaks
//! axum types into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
