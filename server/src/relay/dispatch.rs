//! Event Dispatcher
//!
//! Routes a decoded Rollbar event to the presenter for its type. Events we
//! do not recognize are ignored rather than rejected, so Rollbar can grow
//! new notification types without breaking the relay.

use super::events::{EventKind, RollbarEvent};
use super::extract::ExtractError;
use super::present;
use super::types::WebhookPayload;

/// Outcome of dispatching an event that decoded cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A recognized event, translated into the payload to deliver.
    Payload(WebhookPayload),
    /// An event type the relay does not handle. Nothing to deliver.
    Ignored,
}

/// Selects the presenter for `event` and runs it.
pub fn dispatch_event(event: &RollbarEvent) -> Result<Dispatch, ExtractError> {
    let Some(kind) = EventKind::parse_str(&event.event_name) else {
        return Ok(Dispatch::Ignored);
    };

    let payload = match kind {
        EventKind::NewItem => present::new_item(event)?,
        EventKind::ItemVelocity => present::item_velocity(event)?,
        EventKind::ExpRepeatItem => present::exp_repeat_item(event)?,
        EventKind::ReopenedItem => present::reopened_item(event)?,
        EventKind::ResolvedItem => present::resolved_item(event)?,
    };

    Ok(Dispatch::Payload(payload))
}
