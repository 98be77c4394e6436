//! Relay Server - Main Entry Point
//!
//! Repackages Rollbar webhook events as Discord embeds.

use anyhow::Result;
use tracing::info;

use relay_server::relay::delivery::DiscordClient;
use relay_server::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Rollbar-Discord relay"
    );

    // Build the Discord client and application state
    let discord = DiscordClient::new(&config)?;
    let state = api::AppState::new(config.clone(), discord);

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
