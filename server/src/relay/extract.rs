//! Fallible Field Access for Loosely-Typed Payloads
//!
//! Rollbar's `data` object has no single schema; every event type nests its
//! own structure. These helpers walk dotted paths (`"item.counter"`) into
//! the JSON tree and narrow values to the type the presenter assumed,
//! turning a wrong shape into a typed error instead of a panic.

use serde_json::{Map, Value};
use thiserror::Error;

/// A required payload field was absent or carried the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No value at the given path.
    #[error("event data is missing required field `{0}`")]
    Missing(&'static str),

    /// A value exists at the path but is not the expected type.
    #[error("event data field `{field}` is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Walk a dotted path into the data tree.
fn lookup<'a>(data: &'a Map<String, Value>, path: &'static str) -> Result<&'a Value, ExtractError> {
    let mut current: Option<&Value> = None;
    for segment in path.split('.') {
        current = match current {
            None => data.get(segment),
            Some(value) => value.get(segment),
        };
        if current.is_none() {
            return Err(ExtractError::Missing(path));
        }
    }
    current.ok_or(ExtractError::Missing(path))
}

/// Extract a string field.
pub fn str_field<'a>(
    data: &'a Map<String, Value>,
    path: &'static str,
) -> Result<&'a str, ExtractError> {
    lookup(data, path)?.as_str().ok_or(ExtractError::WrongType {
        field: path,
        expected: "a string",
    })
}

/// Extract an integer-valued numeric field.
///
/// Rollbar serializes counters as JSON numbers that may arrive in either
/// integer or float representation; both narrow to `i64` here.
pub fn int_field(data: &Map<String, Value>, path: &'static str) -> Result<i64, ExtractError> {
    let value = lookup(data, path)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .ok_or(ExtractError::WrongType {
            field: path,
            expected: "a number",
        })
}

/// Extract a field rendered as display text.
///
/// Strings come back verbatim; any other JSON value renders as its compact
/// JSON form. Used for fields whose type Rollbar leaves unconstrained, like
/// `trigger.window_size_description`.
pub fn display_field(data: &Map<String, Value>, path: &'static str) -> Result<String, ExtractError> {
    Ok(match lookup(data, path)? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
