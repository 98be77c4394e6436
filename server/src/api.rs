//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::relay;
use crate::relay::delivery::DiscordClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Client for the Discord webhook API
    pub discord: DiscordClient,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, discord: DiscordClient) -> Self {
        Self {
            config: Arc::new(config),
            discord,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Rollbar notification intake
        .route(
            "/{webhook_id}/{webhook_token}",
            post(relay::handlers::relay_event),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
