//! HTTP server initialization and runtime setup.
//!
//! Builds the content filter and link registry, wires the services and runs
//! the Axum server until shutdown.

use crate::config::Config;
use crate::domain::content_filter::ContentFilter;
use crate::infrastructure::persistence::InMemoryLinkRegistry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Content filter from the built-in prohibited word list
/// - Empty in-memory link registry
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let filter = Arc::new(ContentFilter::with_default_words());
    tracing::info!("Content filter loaded ({} words)", filter.len());

    let registry = Arc::new(InMemoryLinkRegistry::new());

    let state = AppState::new(
        registry,
        filter,
        config.base_url.clone(),
        config.short_code_length,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
