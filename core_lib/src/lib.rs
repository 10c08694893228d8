//! Drag-and-drop document uploader: validation, staging and status
//! rendering, plus a small HTTP service exposing dry runs of it.

pub mod config;
pub mod dom;
pub mod error;
pub mod files;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ui;
pub mod uploader;

pub use config::{AppConfig, ServerConfig, UploaderConfig, UploaderOptions};
pub use dom::{Document, Element, FileInput, MemoryDocument};
pub use error::{AppError, Result};
pub use files::{CandidateFile, FileHandle, FileValidator, ValidationError, ValidationOutcome};
pub use handlers::create_routes;
pub use ui::{format_file_size, render_file_list, sanitize_html, status_summary};
pub use uploader::{ChangeListener, EventResponse, FileUploader, UploaderEvent};

use axum::Router;
use std::{net::SocketAddr, time::Instant};
use tokio::signal;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: AppConfig,
    pub started_at: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            app_name: "Document Uploader".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            started_at: Instant::now(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&state.config.server))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
