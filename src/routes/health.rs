//! Status endpoints

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ReadyResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// GET /
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        message: "Book API ready for requests",
    })
}

/// GET /health
///
/// The database field is a fixed claim; no backing store exists yet.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        database: "connected",
    })
}
