//! HTTP server initialization and runtime setup.
//!
//! Handles object store construction, service wiring, and Axum server
//! lifecycle.

use crate::application::services::ShortenService;
use crate::config::Config;
use crate::infrastructure::persistence::ObjectStoreMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use object_store::ObjectStore;
use object_store::path::Path;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Object store client (backend selected by the `STORE_URL` scheme)
/// - Mapping repository and shorten service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store URL cannot be resolved to a backend
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (store, prefix) = connect_store(&config.store_url)?;
    tracing::info!("Object store ready at {}", config.store_url);

    let repository = Arc::new(ObjectStoreMappingRepository::new(store, prefix));
    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        Arc::new(RandomCodeGenerator),
        config.static_endpoint.clone(),
        config.max_allocation_attempts,
    ));

    let state = AppState::new(shorten_service, repository);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves the configured store URL to an object store client and key
/// prefix.
fn connect_store(store_url: &str) -> Result<(Arc<dyn ObjectStore>, Path)> {
    let url = Url::parse(store_url).context("STORE_URL is not a valid URL")?;
    let (store, prefix) = object_store::parse_url(&url)
        .with_context(|| format!("Unsupported object store URL '{store_url}'"))?;
    Ok((Arc::from(store), prefix))
}

/// Completes when the process receives SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
