// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tower_http::compression::predicate::{DefaultPredicate, NotForContentType, Predicate};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration once; everything downstream gets it injected
    let config = load_dashboard_config()?;

    // Create the data client (infrastructure layer)
    let source = Arc::new(ApiClient::new(config.api.base_url.clone()));
    tracing::info!("Dashboard API at {}", source.dashboard_url());

    let state = Arc::new(AppState { source });

    // Build router (presentation layer)
    // Streamed pages stay uncompressed so the spinner chunk is flushed at once
    let compression = CompressionLayer::new()
        .compress_when(DefaultPredicate::new().and(NotForContentType::new("text/html")));
    let app = router(state)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting call-center dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
