// Main entry point for the organization directory proxy API

use std::sync::Arc;

use anyhow::{Context, Result};
use org_proxy_core::kernel::DirectoryClient;
use org_proxy_core::server::build_app;
use org_proxy_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,org_proxy_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Organization Directory Proxy API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(upstream = %config.external_service_url, "Configuration loaded");

    // Create the upstream client
    let directory = Arc::new(
        DirectoryClient::new(config.external_service_url.clone(), config.api_key.clone())
            .context("Failed to create directory client")?,
    );

    // Build application
    let app = build_app(directory, config.default_page_size);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
