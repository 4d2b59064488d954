//! Book metadata response DTO

use serde::Serialize;

/// Characters of OCR text kept as the placeholder title
const TITLE_PREVIEW_CHARS: usize = 50;

/// Metadata record returned for a processed book
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub language: Option<String>,
    pub volumes: Option<u32>,
}

impl BookResponse {
    /// Build the placeholder record for a set of extracted texts.
    ///
    /// This stands in for the unimplemented metadata-enrichment call; the
    /// title is the only field derived from the upload, everything else is
    /// fixed sample data.
    pub fn mock(extracted_texts: &[String], language: &str, volumes: u32) -> Self {
        Self {
            title: title_preview(extracted_texts),
            author: "Autor Ejemplo".to_string(),
            year: Some(2023),
            publisher: Some("Editorial Mock".to_string()),
            isbn: Some("123-4567890123".to_string()),
            language: Some(language.to_string()),
            volumes: Some(volumes),
        }
    }
}

/// Join extracted texts, keep the first [`TITLE_PREVIEW_CHARS`] characters,
/// and always append an ellipsis marker.
fn title_preview(extracted_texts: &[String]) -> String {
    let joined = extracted_texts.join(" ");
    let mut title: String = joined.chars().take(TITLE_PREVIEW_CHARS).collect();
    title.push_str("...");
    title
}
