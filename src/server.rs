//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream API clients into the services, builds the Axum router,
//! and runs the server until a shutdown signal arrives.

use crate::application::services::{BookSearchService, IsbnLookupService};
use crate::config::Config;
use crate::infrastructure::openbd::OpenBdClient;
use crate::infrastructure::rakuten::RakutenBooksClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - A shared HTTP client for the upstream book-data APIs
/// - The search aggregation and ISBN lookup services
/// - The Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - An upstream endpoint URL does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::new();

    let search_provider = Arc::new(RakutenBooksClient::new(
        http.clone(),
        config.rakuten_endpoint()?,
        config.rakuten_app_id.clone(),
        config.rakuten_genre_id.clone(),
    ));
    let info_provider = Arc::new(OpenBdClient::new(http, config.openbd_endpoint()?));

    let search_service = Arc::new(BookSearchService::new(
        search_provider,
        Duration::from_millis(config.page_delay_ms),
    ));
    let lookup_service = Arc::new(IsbnLookupService::new(info_provider));

    let state = AppState {
        search_service,
        lookup_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
