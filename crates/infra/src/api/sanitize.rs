//! Request body sanitization
//!
//! Top-level keys whose value is `null` or the empty string are dropped before
//! a body is sent. Only the top level is inspected: nested objects and arrays
//! travel exactly as serialized.

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ApiError;

/// Serialize `body` and strip absent top-level fields.
///
/// Returns `Ok(None)` when the body serializes to `null` (no body at all).
/// `0`, `false`, `[]` and `{}` are kept.
///
/// # Errors
///
/// [`ApiError::RequestSetup`] when the body fails to serialize or is not a
/// JSON object.
pub fn sanitize<D>(body: &D) -> Result<Option<Map<String, Value>>, ApiError>
where
    D: Serialize + ?Sized,
{
    let value = serde_json::to_value(body)
        .map_err(|e| ApiError::RequestSetup(format!("Failed to serialize body: {e}")))?;

    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(strip_absent(map))),
        other => Err(ApiError::RequestSetup(format!(
            "Request body must be a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn strip_absent(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter().filter(|(_, value)| !is_absent(value)).collect()
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
