//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::Store;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store (PostgreSQL pool with migrations, or the in-memory store)
/// - URL service
/// - Axum HTTP server with graceful shutdown
///
/// The store is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Store::connect(&config).await?;
    tracing::info!("Store ready ({})", store.backend_name());

    let url_service = Arc::new(UrlService::new(
        store.url_repository(),
        config.base_url.clone(),
        config.slug_policy(),
    ));
    let state = AppState::new(url_service);

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    tracing::info!("Server stopped");

    served?;
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
