//! OCR error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    /// The engine process ran but reported failure; carries its stderr text.
    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    /// Temp-file plumbing or process spawn failure.
    #[error("OCR I/O error: {0}")]
    Io(#[from] std::io::Error),
}
