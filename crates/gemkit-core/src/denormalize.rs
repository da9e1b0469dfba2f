//! Denormalize: recovers structured data that an emitter serialised into a
//! string and embedded inside another JSON document, possibly several levels
//! deep.

use serde_json::Value;

/// Walk `value` and replace every string that looks like a JSON document with
/// its decoded, recursively denormalised form.
///
/// A string qualifies when, after trimming, it is wrapped in `{…}` or `[…]`.
/// Strings that qualify but fail to decode are kept verbatim. Numbers,
/// booleans and null pass through; arrays and objects keep their shape and
/// field order.
pub fn denormalize(value: Value) -> Value {
    match value {
        Value::String(s) => decode_embedded(s),
        Value::Array(items) => Value::Array(items.into_iter().map(denormalize).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k, denormalize(v)))
                .collect(),
        ),
        scalar => scalar,
    }
}

// Recursion only continues into freshly decoded values, so depth is bounded
// by how many times the data was actually encoded.
fn decode_embedded(s: String) -> Value {
    if !looks_like_document(&s) {
        return Value::String(s);
    }
    match serde_json::from_str::<Value>(&s) {
        Ok(decoded) => denormalize(decoded),
        Err(err) => {
            tracing::trace!(error = %err, "keeping string that failed to decode");
            Value::String(s)
        }
    }
}

fn looks_like_document(s: &str) -> bool {
    let t = s.trim();
    (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']'))
}
