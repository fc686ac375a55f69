//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development when only the REST surface is needed. The workspace's main `tht-run`
//! binary loads `.env` first and then serves the same router.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use tht_core::config::catalog_path_from_env_value;

/// Main entry point for the Teen Health Talk REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `THT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `THT_CATALOG_PATH`: YAML section catalog to serve instead of the built-in one
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the catalog override is invalid or fails to load,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("THT_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Teen Health Talk REST API on {}", addr);

    let cfg = catalog_path_from_env_value(std::env::var("THT_CATALOG_PATH").ok())?;
    let catalog = cfg.load_catalog()?;
    tracing::info!("-- Serving {} sections", catalog.len());

    let app = router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
