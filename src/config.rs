//! Configuration management for the Book Scan server

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract executable, resolved via PATH unless an absolute path is given.
    pub tesseract_cmd: String,
    /// ISO 639 language used when the request does not supply one.
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; the single entry "*" means any origin (dev-only posture).
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            ocr: OcrConfig {
                tesseract_cmd: "tesseract".to_string(),
                default_language: "es".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            ocr: OcrConfig {
                tesseract_cmd: env::var("TESSERACT_CMD")
                    .unwrap_or_else(|_| "tesseract".to_string()),
                default_language: env::var("OCR_DEFAULT_LANGUAGE")
                    .unwrap_or_else(|_| "es".to_string()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|v| parse_origin_list(&v))
                    .unwrap_or_else(|_| vec!["*".to_string()]),
            },
        }
    }
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
