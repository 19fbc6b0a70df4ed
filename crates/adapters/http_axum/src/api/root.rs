//! Root probe.

use axum::Json;
use serde::Serialize;

/// Fixed confirmation returned by `GET /`.
pub const RUNNING_MESSAGE: &str = "itemapi server is running 🚀";

#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

/// `GET /`
pub async fn read() -> Json<RootMessage> {
    Json(RootMessage {
        message: RUNNING_MESSAGE,
    })
}
