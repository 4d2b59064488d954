//! Book Scan Server
//!
//! A minimal book-metadata API: uploaded cover images are OCR'd with
//! tesseract and answered with a placeholder metadata record until the
//! external enrichment lookup is wired in.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_scan_server::config::{Config, CorsConfig};
use book_scan_server::ocr::{OcrEngine, TesseractEngine};
use book_scan_server::routes;
use book_scan_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_scan_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Book Scan Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Tesseract command: {}", config.ocr.tesseract_cmd);
    tracing::info!("Default OCR language: {}", config.ocr.default_language);

    // Probe the OCR engine; a missing binary only fails at request time
    let ocr_engine: Arc<dyn OcrEngine> =
        Arc::new(TesseractEngine::new(&config.ocr.tesseract_cmd));
    if ocr_engine.is_available().await {
        tracing::info!("OCR engine '{}' is available", ocr_engine.name());
    } else {
        tracing::warn!(
            "OCR engine '{}' not found at '{}'; /process-book/ will fail until it is installed",
            ocr_engine.name(),
            config.ocr.tesseract_cmd
        );
    }

    let cors = build_cors(&config.cors);
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = AppState::new(config, ocr_engine);
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;
    tracing::info!("Book Scan Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Build the CORS layer; "*" keeps the permissive dev posture, anything else
/// becomes an explicit origin list.
fn build_cors(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
