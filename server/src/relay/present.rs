//! Event Presenters
//!
//! One pure function per recognized Rollbar event type. Each pulls the
//! fields its event is known to carry and produces the Discord payload;
//! a missing or mistyped field fails the whole request.

use crate::util::trim_title;

use super::events::RollbarEvent;
use super::extract::{display_field, int_field, str_field, ExtractError};
use super::types::{Embed, EmbedField, WebhookPayload};

/// Accent color for new and reopened errors (crimson).
const ERROR_COLOR: u32 = 0xC0271E;

/// Accent color for resolved errors (green).
const RESOLVED_COLOR: u32 = 0x1EC086;

/// `new_item`: the first occurrence of an error.
pub fn new_item(event: &RollbarEvent) -> Result<WebhookPayload, ExtractError> {
    let counter = int_field(&event.data, "item.counter")?;
    let title = str_field(&event.data, "item.title")?;
    let environment = str_field(&event.data, "item.environment")?;
    let occurrences = int_field(&event.data, "item.total_occurrences")?;
    let url = str_field(&event.data, "url")?;

    Ok(WebhookPayload::single(Embed {
        title: trim_title(&format!("#{counter} New Error: {title}")),
        url: url.to_string(),
        color: Some(ERROR_COLOR),
        fields: vec![
            EmbedField::inline("Environment", environment),
            EmbedField::inline("Occurrences", occurrences.to_string()),
        ],
    }))
}

/// `item_velocity`: an error crossed an occurrence-rate threshold.
///
/// The occurrence count lives at the top level of `data`, not on the item:
/// it counts occurrences within the trigger window, not lifetime total.
pub fn item_velocity(event: &RollbarEvent) -> Result<WebhookPayload, ExtractError> {
    let counter = int_field(&event.data, "item.counter")?;
    let title = str_field(&event.data, "item.title")?;
    let environment = str_field(&event.data, "item.environment")?;
    let occurrences = int_field(&event.data, "occurrences")?;
    let window = display_field(&event.data, "trigger.window_size_description")?;
    let url = str_field(&event.data, "url")?;

    Ok(WebhookPayload::single(Embed {
        title: trim_title(&format!(
            "#{counter} {occurrences} occurrences in {window}: {title}"
        )),
        url: url.to_string(),
        color: None,
        fields: vec![EmbedField::inline("Environment", environment)],
    }))
}

/// `exp_repeat_item`: an error hit its 10^nth occurrence.
pub fn exp_repeat_item(event: &RollbarEvent) -> Result<WebhookPayload, ExtractError> {
    let counter = int_field(&event.data, "item.counter")?;
    let title = str_field(&event.data, "item.title")?;
    let environment = str_field(&event.data, "item.environment")?;
    let occurrences = int_field(&event.data, "occurrences")?;
    let url = str_field(&event.data, "url")?;

    Ok(WebhookPayload::single(Embed {
        title: trim_title(&format!("#{counter} {occurrences}th error: {title}")),
        url: url.to_string(),
        color: None,
        fields: vec![EmbedField::inline("Environment", environment)],
    }))
}

/// `reopened_item`: a previously resolved error came back.
pub fn reopened_item(event: &RollbarEvent) -> Result<WebhookPayload, ExtractError> {
    let counter = int_field(&event.data, "item.counter")?;
    let title = str_field(&event.data, "item.title")?;
    let environment = str_field(&event.data, "item.environment")?;
    let occurrences = int_field(&event.data, "item.total_occurrences")?;
    let url = str_field(&event.data, "url")?;

    Ok(WebhookPayload::single(Embed {
        title: trim_title(&format!("#{counter} Reopened: {title}")),
        url: url.to_string(),
        color: Some(ERROR_COLOR),
        fields: vec![
            EmbedField::inline("Environment", environment),
            EmbedField::inline("Occurrences", occurrences.to_string()),
        ],
    }))
}

/// `resolved_item`: an error was marked resolved.
pub fn resolved_item(event: &RollbarEvent) -> Result<WebhookPayload, ExtractError> {
    let counter = int_field(&event.data, "item.counter")?;
    let title = str_field(&event.data, "item.title")?;
    let environment = str_field(&event.data, "item.environment")?;
    let occurrences = int_field(&event.data, "item.total_occurrences")?;
    let url = str_field(&event.data, "url")?;

    Ok(WebhookPayload::single(Embed {
        title: trim_title(&format!("#{counter} Resolved: {title}")),
        url: url.to_string(),
        color: Some(RESOLVED_COLOR),
        fields: vec![
            EmbedField::inline("Environment", environment),
            EmbedField::inline("Occurrences", occurrences.to_string()),
        ],
    }))
}
