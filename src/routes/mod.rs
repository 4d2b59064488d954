//! Route modules for the Book Scan server

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod health;
pub mod process;

/// Two images at up to 10 MiB each, plus multipart framing
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::ready))
        .route("/health", get(health::health_check))
        .route("/process-book/", post(process::process_book))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
