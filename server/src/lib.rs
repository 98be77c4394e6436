//! Relay Server
//!
//! Receives Rollbar webhook notifications and repackages the event types we
//! care about as Discord embeds, delivered to the webhook named by the
//! request path.

pub mod api;
pub mod config;
pub mod relay;
pub mod util;
