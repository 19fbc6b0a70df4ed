//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use itemapi_domain::error::ValidationError;

/// Part of the request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    location: Location,
    field: Option<&'static str>,
    kind: &'static str,
}

/// Request failures surfaced to the caller as client errors.
#[derive(Debug)]
pub enum ApiError {
    /// The input was readable but did not match the expected shape.
    Validation {
        location: Location,
        source: ValidationError,
    },
    /// axum refused the input before any shape check could run
    /// (wrong content type, malformed JSON, unparseable query string, …).
    Rejected {
        location: Location,
        status: StatusCode,
        message: String,
    },
}

impl ApiError {
    /// Validation failure of a path parameter.
    #[must_use]
    pub fn path(source: ValidationError) -> Self {
        Self::Validation {
            location: Location::Path,
            source,
        }
    }

    /// Validation failure of the request body.
    #[must_use]
    pub fn body(source: ValidationError) -> Self {
        Self::Validation {
            location: Location::Body,
            source,
        }
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            location: Location::Body,
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            location: Location::Query,
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation { location, source } => ErrorBody {
                error: source.to_string(),
                location,
                field: source.field(),
                kind: source.kind(),
            },
            Self::Rejected {
                location, message, ..
            } => ErrorBody {
                error: message,
                location,
                field: None,
                kind: "rejected",
            },
        };

        tracing::debug!(
            status = status.as_u16(),
            location = ?body.location,
            field = body.field,
            error = %body.error,
            "rejecting request"
        );

        (status, Json(body)).into_response()
    }
}
