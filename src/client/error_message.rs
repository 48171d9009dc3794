//! Normalization of heterogeneous API error payloads into one message

use reqwest::StatusCode;
use serde_json::Value;

/// Message used when nothing better can be extracted
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Everything known about a failed call.
///
/// `body` is the response body (parsed JSON, or the raw text as a JSON
/// string); `message` is the generic transport-level description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failure {
    pub body: Option<Value>,
    pub message: Option<String>,
}

impl Failure {
    /// Failure for a non-2xx response with the given raw body
    pub fn http(status: StatusCode, body: &str) -> Self {
        Self {
            body: parse_body(body),
            message: Some(format!("Request failed with status code {}", status.as_u16())),
        }
    }

    /// Failure for a request that never produced a response
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            body: None,
            message: Some(message.into()),
        }
    }

    /// Failure carrying only a response body
    pub fn with_body(body: Value) -> Self {
        Self {
            body: Some(body),
            message: None,
        }
    }
}

/// Parse a raw body as JSON, falling back to the text itself.
///
/// An empty body counts as no body at all.
fn parse_body(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }

    Some(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}

/// Derive a single human-readable message from a failure.
///
/// Backend-supplied text wins over the generic transport message. In order:
/// a string body, then the body's `message`, `error`, first `errors` entry
/// and first `details` entry, then the transport message, then
/// [`FALLBACK_ERROR_MESSAGE`]. Never panics.
pub fn extract_error_message(failure: &Failure) -> String {
    if let Some(body) = &failure.body {
        if let Some(message) = message_from_body(body) {
            return message;
        }
    }

    match failure.message.as_deref() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

fn message_from_body(body: &Value) -> Option<String> {
    if let Value::String(text) = body {
        return Some(text.clone());
    }

    let object = body.as_object()?;

    for field in ["message", "error"] {
        if let Some(Value::String(text)) = object.get(field) {
            if !text.is_empty() {
                return Some(text.clone());
            }
        }
    }

    ["errors", "details"]
        .into_iter()
        .find_map(|field| first_entry_message(object.get(field)?))
}

/// First element of a non-empty array: itself if a string, else its `message`.
fn first_entry_message(entries: &Value) -> Option<String> {
    match entries.as_array()?.first()? {
        Value::String(text) => Some(text.clone()),
        entry => entry.get("message")?.as_str().map(str::to_string),
    }
}
