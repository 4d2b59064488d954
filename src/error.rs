//! Error types for the Book Scan server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::ocr::OcrError;

/// Maximum number of images accepted per request
pub const MAX_IMAGES: usize = 2;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Máximo 2 imágenes permitidas")]
    TooManyImages,

    #[error("Invalid multipart upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Invalid volumes value: {0}")]
    InvalidVolumes(String),

    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error(transparent)]
    Ocr(#[from] OcrError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::TooManyImages | Self::Multipart(_) | Self::InvalidVolumes(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::ImageDecode(_) | Self::Ocr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body; the `detail` shape is part of the wire contract.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}
