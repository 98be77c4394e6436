//! Rollbar → Discord Relay Pipeline
//!
//! Decodes inbound Rollbar notifications, builds a Discord embed per
//! recognized event type, and executes the destination webhook.

pub mod delivery;
pub mod dispatch;
pub mod events;
pub mod extract;
pub mod handlers;
pub mod present;
pub mod types;
