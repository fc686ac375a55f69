use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use tht_core::config::catalog_path_from_env_value;

/// Main entry point for the Teen Health Talk service
///
/// Loads `.env` if present, resolves configuration once, and serves the REST API.
///
/// # Environment Variables
/// - `THT_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `THT_CATALOG_PATH`: YAML section catalog to serve instead of the built-in one
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tht=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("THT_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = catalog_path_from_env_value(std::env::var("THT_CATALOG_PATH").ok())?;
    let catalog = cfg.load_catalog()?;

    tracing::info!("++ Starting Teen Health Talk REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(AppState::new(catalog))).await?;

    Ok(())
}
