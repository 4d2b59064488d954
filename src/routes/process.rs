//! Book image ingestion endpoint
//!
//! POST /process-book/ accepts a multipart form with up to two `images` file
//! parts plus optional `language` and `volumes` parameters (query or form,
//! form winning). Each image is decoded, OCR'd sequentially, and the joined
//! text becomes the placeholder title of a mocked metadata record.

use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;

use crate::book::BookResponse;
use crate::error::{AppError, MAX_IMAGES};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessParams {
    pub language: Option<String>,
    pub volumes: Option<u32>,
}

pub async fn process_book(
    State(state): State<AppState>,
    Query(params): Query<ProcessParams>,
    mut multipart: Multipart,
) -> Result<Json<BookResponse>, AppError> {
    let mut images: Vec<Bytes> = Vec::new();
    let mut language = params.language;
    let mut volumes = params.volumes;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "images" => {
                // Reject the surplus part before buffering it
                if images.len() == MAX_IMAGES {
                    return Err(AppError::TooManyImages);
                }
                images.push(field.bytes().await?);
            }
            "language" => {
                language = Some(field.text().await?);
            }
            "volumes" => {
                let raw = field.text().await?;
                volumes = Some(
                    raw.trim()
                        .parse()
                        .map_err(|_| AppError::InvalidVolumes(raw.clone()))?,
                );
            }
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown multipart field");
            }
        }
    }

    let language = language
        .unwrap_or_else(|| state.config().ocr.default_language.clone());
    let volumes = volumes.unwrap_or(1);

    tracing::debug!(
        images = images.len(),
        language = %language,
        volumes,
        "Processing book images"
    );

    // Decode and OCR strictly in upload order; the first failure aborts the
    // whole request.
    let mut extracted_texts = Vec::with_capacity(images.len());
    for data in &images {
        let decoded = image::load_from_memory(data)?;
        let text = state.ocr_engine().recognize(&decoded, &language).await?;
        extracted_texts.push(text);
    }

    // The metadata-enrichment call is not implemented yet; return the mock
    // record in its place.
    Ok(Json(BookResponse::mock(&extracted_texts, &language, volumes)))
}
