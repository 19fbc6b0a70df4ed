//! Cross-origin policy.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins allowed when nothing else is configured: the local Vite dev server.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Build the CORS layer for the given origins.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of answered with a literal `*`.
///
/// # Panics
///
/// Panics if `allowed_origins` contains `*`; callers validate origins first.
#[must_use]
pub fn layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// The default origins as header values.
#[must_use]
pub fn default_origins() -> Vec<HeaderValue> {
    DEFAULT_ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect()
}
