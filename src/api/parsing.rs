use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::BotError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a Lambda HTTP event.
///
/// Function URLs and HTTP API (v2) payloads carry it in
/// `requestContext.http.method`; REST API (v1) payloads in `httpMethod`.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"]).or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request body of a Lambda HTTP event, base64-decoded when flagged.
///
/// # Errors
///
/// Returns `BotError::MalformedUpdate` if the body is missing or cannot be
/// decoded to UTF-8 text.
pub fn extract_body(payload: &Value) -> Result<String, BotError> {
    let Some(body) = payload.get("body").and_then(Value::as_str) else {
        return Err(BotError::MalformedUpdate("request has no body".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| BotError::MalformedUpdate(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| BotError::MalformedUpdate(format!("Body is not UTF-8: {e}")))
}
