//! Relay Request Handler
//!
//! The single inbound endpoint. Rollbar POSTs a notification to
//! `/{webhook_id}/{webhook_token}`; we translate it and forward the result
//! to the Discord webhook those path segments name.
//!
//! Rollbar only distinguishes success from failure, so the response is 200
//! whenever the event was handled (or deliberately ignored) and 500 for
//! every failure.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, instrument};

use crate::api::AppState;

use super::dispatch::{dispatch_event, Dispatch};
use super::events::RollbarEvent;
use super::types::RelayError;

/// POST /`{webhook_id}/{webhook_token}`
///
/// The webhook token is a bearer secret. It is forwarded to Discord and
/// never logged.
#[instrument(skip_all)]
pub async fn relay_event(
    State(state): State<AppState>,
    Path((webhook_id, webhook_token)): Path<(String, String)>,
    body: Bytes,
) -> Result<StatusCode, RelayError> {
    let event: RollbarEvent = serde_json::from_slice(&body).map_err(RelayError::Decode)?;

    info!(
        event_name = %event.event_name,
        webhook_id = %webhook_id,
        data = ?event.data,
        "Received Rollbar event"
    );

    let payload = match dispatch_event(&event)? {
        Dispatch::Payload(payload) => payload,
        Dispatch::Ignored => {
            info!(event_name = %event.event_name, "Ignoring unhandled event type");
            return Ok(StatusCode::OK);
        }
    };

    info!(event_name = %event.event_name, payload = ?payload, "Built Discord payload");

    let start = std::time::Instant::now();
    state
        .discord
        .execute_webhook(&payload, &webhook_id, &webhook_token)
        .await?;
    let latency_ms = start.elapsed().as_millis() as u64;

    info!(
        event_name = %event.event_name,
        webhook_id = %webhook_id,
        latency_ms,
        "Delivered event to Discord"
    );

    Ok(StatusCode::OK)
}
