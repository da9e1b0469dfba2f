//! Core types for gemkit-core.
//!
//! Records carry no fixed schema, so a [`LogRecord`] is simply a
//! [`serde_json::Value`]. The two key tables below are compile-time perfect
//! hash sets: built once, shared by every stage, never mutated.

use phf::phf_ordered_set;

/// One decoded unit from the telemetry artifact: an object, array, or scalar.
pub type LogRecord = serde_json::Value;

/// Instrumentation attribute keys that make a record worth keeping.
pub static ATTRIBUTE_KEYS: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "gemini_cli.user_prompt",
    "gemini_cli.api_response",
    "gen_ai.client.inference.operation.details",
    "gemini_cli.tool_call",
    "gemini_cli.config",
    "gemini_cli.model_routing",
};

/// Bulky top-level fields removed from every retained record.
pub static STRIPPED_FIELDS: phf::OrderedSet<&'static str> = phf_ordered_set! {
    "hrTime",
    "hrTimeObserved",
    "resource",
};

/// Whether `s` is one of the [`ATTRIBUTE_KEYS`].
pub fn is_attribute_key(s: &str) -> bool {
    ATTRIBUTE_KEYS.contains(s)
}
