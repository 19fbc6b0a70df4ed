//! Axum router assembly.

use axum::Router;
use axum::http::HeaderValue;
use tower_http::trace::TraceLayer;

/// Knobs the composition root passes to [`build`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Origins granted cross-origin access, credentials included.
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: crate::cors::default_origins(),
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Wraps the API routes in the CORS layer and a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build(options: RouterOptions) -> Router {
    crate::api::routes()
        .layer(crate::cors::layer(options.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
