//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::OcrEngine;

/// Shared application state
///
/// Built once at startup and never mutated afterwards; request handlers only
/// read from it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    ocr_engine: Arc<dyn OcrEngine>,
}

impl AppState {
    pub fn new(config: Config, ocr_engine: Arc<dyn OcrEngine>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, ocr_engine }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn ocr_engine(&self) -> &Arc<dyn OcrEngine> {
        &self.inner.ocr_engine
    }
}
