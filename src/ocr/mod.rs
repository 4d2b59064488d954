//! OCR Module
//!
//! Text extraction from uploaded book images. The only shipped backend is
//! tesseract, invoked as an external process; the trait keeps the seam open
//! for tests and future engines.

mod engine;
mod types;

pub use engine::{OcrEngine, TesseractEngine};
pub use types::OcrError;
