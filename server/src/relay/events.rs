//! Inbound Rollbar Event Model

use serde::Deserialize;
use serde_json::{Map, Value};

/// A Rollbar webhook notification.
///
/// `data` carries a different shape per `event_name`; presenters pull the
/// fields they need out of the tree and fail the request when one is missing
/// or mistyped. Both keys default when absent, matching Rollbar's own
/// leniency: an empty object decodes fine and dispatches as unrecognized.
#[derive(Debug, Clone, Deserialize)]
pub struct RollbarEvent {
    /// Event type discriminator (e.g., `"new_item"`).
    #[serde(default)]
    pub event_name: String,

    /// Loosely-typed event payload, keyed per event type.
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// The Rollbar event names this relay translates.
///
/// Rollbar emits more event types than these (deploys, occurrences, test
/// notifications); anything not listed here is dropped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// First occurrence of a new error.
    NewItem,
    /// An error crossed an occurrence-rate threshold.
    ItemVelocity,
    /// An error hit its 10^nth occurrence.
    ExpRepeatItem,
    /// A previously resolved error came back.
    ReopenedItem,
    /// An error was marked resolved.
    ResolvedItem,
}

impl EventKind {
    /// Parse from the wire event name (e.g., `"new_item"`).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "new_item" => Some(Self::NewItem),
            "item_velocity" => Some(Self::ItemVelocity),
            "exp_repeat_item" => Some(Self::ExpRepeatItem),
            "reopened_item" => Some(Self::ReopenedItem),
            "resolved_item" => Some(Self::ResolvedItem),
            _ => None,
        }
    }

    /// Convert to the wire event name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewItem => "new_item",
            Self::ItemVelocity => "item_velocity",
            Self::ExpRepeatItem => "exp_repeat_item",
            Self::ReopenedItem => "reopened_item",
            Self::ResolvedItem => "resolved_item",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
