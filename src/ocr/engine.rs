//! OCR engines
//!
//! Defines the engine trait and the tesseract implementation, which shells
//! out to the `tesseract` binary through temp files.

use async_trait::async_trait;
use image::DynamicImage;

use super::types::OcrError;

/// Page-segmentation mode: assume a single uniform block of text.
const PAGE_SEGMENTATION_MODE: &str = "6";

/// OCR engine trait
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine identifier for logs
    fn name(&self) -> &'static str;

    /// Check whether the engine can be invoked at all
    async fn is_available(&self) -> bool;

    /// Extract text from a decoded image
    async fn recognize(
        &self,
        image: &DynamicImage,
        language: &str,
    ) -> Result<String, OcrError>;
}

/// Tesseract OCR engine
pub struct TesseractEngine {
    /// Executable name or path, from configuration
    cmd: String,
}

impl TesseractEngine {
    pub fn new(cmd: &str) -> Self {
        Self {
            cmd: cmd.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn is_available(&self) -> bool {
        std::process::Command::new(&self.cmd)
            .arg("--version")
            .output()
            .is_ok()
    }

    async fn recognize(
        &self,
        image: &DynamicImage,
        language: &str,
    ) -> Result<String, OcrError> {
        use std::process::Command;

        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", uuid::Uuid::new_v4()));
        let output_base = temp_dir.join(format!("ocr_output_{}", uuid::Uuid::new_v4()));

        // Re-encode the decoded image as PNG for tesseract
        let mut png = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| OcrError::EngineFailed(format!("Failed to encode image: {}", e)))?;
        std::fs::write(&input_path, &png)?;

        let output = Command::new(&self.cmd)
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(language)
            .arg("--psm")
            .arg(PAGE_SEGMENTATION_MODE)
            .output();

        let _ = std::fs::remove_file(&input_path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(format!(
                "Tesseract failed: {}",
                stderr
            )));
        }

        let output_file = format!("{}.txt", output_base.display());
        let text = std::fs::read_to_string(&output_file)?;
        let _ = std::fs::remove_file(&output_file);

        Ok(text.trim().to_string())
    }
}
