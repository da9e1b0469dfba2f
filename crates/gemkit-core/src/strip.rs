//! Strip: drops bulky top-level fields from a retained record.

use serde_json::Value;

use crate::types::{LogRecord, STRIPPED_FIELDS};

/// Remove every [`STRIPPED_FIELDS`] entry from the top level of `record`.
///
/// Nested fields with the same names are left alone. Non-object records pass
/// through unchanged.
pub fn strip_fields(mut record: LogRecord) -> LogRecord {
    if let Value::Object(fields) = &mut record {
        for name in STRIPPED_FIELDS.iter() {
            fields.shift_remove(*name);
        }
    }
    record
}
