//! Discord Delivery Client
//!
//! Posts webhook payloads to the Discord Execute Webhook endpoint. Delivery
//! happens inside the inbound request: one Rollbar notification in, one
//! Discord POST out, no queueing or retries.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Config;

use super::types::WebhookPayload;

/// Failure while delivering a payload to Discord.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The payload could not be serialized to JSON.
    #[error("failed to serialize webhook payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP request never completed (connect, timeout, TLS).
    #[error("failed to send webhook request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Discord answered with something other than 204 No Content.
    #[error("unexpected reply from Discord: status={status} body={body}")]
    UnexpectedStatus {
        /// HTTP status Discord returned.
        status: u16,
        /// Response body, for the log.
        body: String,
    },
}

/// HTTP client for the Discord webhook API.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
}

impl DiscordClient {
    /// Build a client from the server configuration.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.delivery_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.discord_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the Execute Webhook endpoint for one webhook.
    fn webhook_url(&self, webhook_id: &str, webhook_token: &str) -> String {
        format!(
            "{}/api/webhooks/{webhook_id}/{webhook_token}",
            self.api_base
        )
    }

    /// Deliver `payload` to the webhook named by `webhook_id` and
    /// `webhook_token`.
    ///
    /// Discord acknowledges a webhook execution with 204 No Content; any
    /// other status is a failure and its body is captured for the log.
    pub async fn execute_webhook(
        &self,
        payload: &WebhookPayload,
        webhook_id: &str,
        webhook_token: &str,
    ) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(payload).map_err(DeliveryError::Serialize)?;

        let response = self
            .http
            .post(self.webhook_url(webhook_id, webhook_token))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
