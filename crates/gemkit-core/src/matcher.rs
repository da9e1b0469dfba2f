//! Matcher: decides whether a record carries any instrumentation attribute
//! worth keeping.
//!
//! Attribute data can sit anywhere in a record: flattened onto the record
//! itself, nested under `resource`/`scope`, or encoded as an OpenTelemetry
//! `[{ "key": …, "value": … }]` list. The search therefore walks the whole
//! value and short-circuits on the first hit.

use serde_json::{Map, Value};

use crate::types::{is_attribute_key, LogRecord};

/// Whether `record` mentions any of the [`ATTRIBUTE_KEYS`](crate::ATTRIBUTE_KEYS).
///
/// Scalars never match. Arrays match when any element matches. For objects,
/// see [`object_matches`].
pub fn is_relevant(record: &LogRecord) -> bool {
    match record {
        Value::Array(items) => items.iter().any(is_relevant),
        Value::Object(fields) => object_matches(fields),
        _ => false,
    }
}

/// An object matches when any of these holds, checked in order:
///
/// 1. it has a `key` field whose string value is an attribute key
///    (the `{key, value}` pair convention);
/// 2. an attribute key is itself one of its field names;
/// 3. one of its fields holds a string equal to an attribute key
///    (event-name style tagging);
/// 4. any nested object or array value matches.
fn object_matches(fields: &Map<String, Value>) -> bool {
    if let Some(Value::String(key)) = fields.get("key") {
        if is_attribute_key(key) {
            return true;
        }
    }

    if fields.keys().any(|name| is_attribute_key(name)) {
        return true;
    }

    if fields
        .values()
        .any(|v| matches!(v, Value::String(s) if is_attribute_key(s)))
    {
        return true;
    }

    fields
        .values()
        .filter(|v| v.is_object() || v.is_array())
        .any(is_relevant)
}
