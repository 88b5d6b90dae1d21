use std::sync::Arc;

use gateway::{app, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Make sure gateway.toml exists or set GATEWAY__BACKEND__PORT.",
            e
        )
    })?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.logging.level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting gateway, delegating to {}", config.backend.base_url());

    let addr = config.listen_addr();
    let state = Arc::new(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway started on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
