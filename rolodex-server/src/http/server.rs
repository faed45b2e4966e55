//! Axum server setup
//!
//! Router construction, tracing and timeout middleware, static assets,
//! and graceful shutdown on SIGTERM/Ctrl+C.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::Store;

use super::routes;

/// Per-request deadline covering read, handle, and write.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state, injected into handlers via `with_state`.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Build the application router with all routes.
///
/// Unmatched paths fall through to axum's default 404 - a request for
/// an unknown page is a client error, not a server fault.
pub fn build_router(store: Store, assets_dir: &Path) -> Router {
    let state = AppState { store };

    Router::new()
        .merge(routes::index::router())
        .merge(routes::writer::router())
        .merge(routes::reader::router())
        .merge(routes::views::router())
        .merge(routes::deleted::router())
        .nest_service("/css", ServeDir::new(assets_dir))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until shutdown.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig::default();
/// let store = Store::open(&config.database).await?;
/// run_server(store, config).await?;
/// ```
pub async fn run_server(store: Store, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(store, &config.assets_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
