//! Relay Types
//!
//! Discord embed wire structures and the request-level error enum.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use super::delivery::DeliveryError;
use super::extract::ExtractError;

/// A labeled field rendered inside a Discord embed.
///
/// Field order is meaningful: Discord lays fields out left-to-right in the
/// order they appear in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// Build an inline field (every field this relay emits is inline).
    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

/// A Discord embed: title, source link, optional accent color, fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    /// Packed RGB accent color; omitted from the wire format when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    pub fields: Vec<EmbedField>,
}

/// The payload POSTed to a Discord webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    /// Wrap a single embed. This relay never sends more than one.
    #[must_use]
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}

/// Errors that terminate relay request processing.
///
/// Every variant answers the inbound caller with a bare 500; the cause is
/// logged, never echoed back.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound body is not a valid Rollbar event.
    #[error("invalid Rollbar event body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A presenter's required field was absent or mistyped.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Outbound delivery to Discord failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            Self::Decode(e) => tracing::error!(error = %e, "Failed to decode inbound event"),
            Self::Extract(e) => tracing::error!(error = %e, "Failed to build Discord payload"),
            Self::Delivery(e) => tracing::error!(error = %e, "Failed to deliver event to Discord"),
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
