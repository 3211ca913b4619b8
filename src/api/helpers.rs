//! Common helper functions for the route handlers.
//!
//! Responses are Lambda proxy envelopes: a status code plus an optional
//! body string, JSON-encoded except where a route promises plain text.

use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// Bare acknowledgment for the chat webhook.
///
/// Telegram only inspects the status; the envelope carries no body field
/// at all.
#[must_use]
pub fn ack() -> Value {
    json!({ "statusCode": 200 })
}

/// Returns a 200 OK response with a JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    json!({ "statusCode": 200, "body": body.to_string() })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns the 404 for unrecognized paths; the body is plain text, not JSON.
#[must_use]
pub fn route_not_found() -> Value {
    json!({ "statusCode": 404, "body": "Route not found." })
}
