//! Lambda HTTP response builders.

use serde_json::{Value, json};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(text: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": TEXT_PLAIN },
        "body": text
    })
}

/// Returns a 200 OK acknowledgement for a handled update.
#[must_use]
pub fn ok_ack() -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": APPLICATION_JSON },
        "body": json!({ "ok": true }).to_string()
    })
}

/// Returns a 200 OK acknowledgement for an update that was not answered.
///
/// Still a 200 so Telegram does not keep redelivering the update.
#[must_use]
pub fn ok_ignored() -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": APPLICATION_JSON },
        "body": json!({ "ok": true, "status": "ignored" }).to_string()
    })
}

/// Returns a 405 response advertising the supported methods.
#[must_use]
pub fn method_not_allowed() -> Value {
    json!({
        "statusCode": 405,
        "headers": { "content-type": TEXT_PLAIN, "allow": "GET, POST" },
        "body": "Method Not Allowed"
    })
}
