//! Server Configuration
//!
//! Loads configuration from environment variables.

use std::env;

/// Server configuration loaded from environment variables.
///
/// Nothing here is required: inbound requests carry the Discord webhook
/// credentials in their path, so the relay itself holds no secrets.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Base URL of the Discord API (overridable for tests and proxies)
    pub discord_api_base: String,

    /// Outbound delivery timeout in seconds (default: 10)
    pub delivery_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            discord_api_base: env::var("DISCORD_API_BASE")
                .unwrap_or_else(|_| "https://discord.com".into()),
            delivery_timeout_secs: env::var("DELIVERY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            discord_api_base: "https://discord.com".into(),
            delivery_timeout_secs: 2,
        }
    }
}
