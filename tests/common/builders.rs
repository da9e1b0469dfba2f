//! Test builders: ergonomic constructors for records and project layouts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use gemkit_core::config::{SETTINGS_DIR, SETTINGS_FILE};
use gemkit_core::LogRecord;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for OpenTelemetry-shaped [`LogRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("User prompt.")
///     .event("gemini_cli.user_prompt")
///     .attribute("prompt", "hello")
///     .with_noise()
///     .build();
/// ```
pub struct RecordBuilder {
    body: String,
    attributes: Map<String, Value>,
    otlp_pairs: Vec<Value>,
    noise: bool,
}

impl RecordBuilder {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            attributes: Map::new(),
            otlp_pairs: Vec::new(),
            noise: false,
        }
    }

    pub fn event(self, name: &str) -> Self {
        self.attribute("event.name", name)
    }

    pub fn attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Add an attribute in the OTLP `{key, value}` list form.
    pub fn otlp_attribute(mut self, key: &str, value: &str) -> Self {
        self.otlp_pairs
            .push(json!({"key": key, "value": {"stringValue": value}}));
        self
    }

    /// Add `hrTime`, `hrTimeObserved` and `resource` top-level fields.
    pub fn with_noise(mut self) -> Self {
        self.noise = true;
        self
    }

    pub fn build(self) -> LogRecord {
        let mut record = Map::new();
        if self.noise {
            record.insert("hrTime".into(), json!([1718000000, 0]));
            record.insert("hrTimeObserved".into(), json!([1718000000, 1]));
            record.insert(
                "resource".into(),
                json!({"attributes": {"service.name": "gemini-cli"}}),
            );
        }
        record.insert("body".into(), Value::String(self.body));
        if !self.otlp_pairs.is_empty() {
            record.insert("attributes".into(), Value::Array(self.otlp_pairs));
        } else {
            record.insert("attributes".into(), Value::Object(self.attributes));
        }
        Value::Object(record)
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A throwaway project root with an optional `.gemini/settings.json` and a
/// telemetry artifact.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp project"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings(self, body: &str) -> Self {
        let dir = self.root().join(SETTINGS_DIR);
        std::fs::create_dir_all(&dir).expect("create settings dir");
        std::fs::write(dir.join(SETTINGS_FILE), body).expect("write settings");
        self
    }

    /// Write `content` to `rel` under the project root.
    pub fn artifact(self, rel: &str, content: &str) -> Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create artifact dir");
        }
        std::fs::write(path, content).expect("write artifact");
        self
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read project file")
    }
}
