//! Normalizer: turns raw telemetry text into an ordered sequence of
//! [`LogRecord`] values.
//!
//! Emitters are inconsistent about framing, so parsing is attempted in order:
//! whole JSON array → JSON Lines → concatenated objects. The first strategy
//! that accepts the input wins; the last one always applies.

use serde_json::Value;

use crate::types::LogRecord;

/// Which framing the artifact turned out to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStrategy {
    /// The whole text is one JSON array; each element is a record.
    WholeArray,
    /// Every non-empty line is an independent JSON document.
    JsonLines,
    /// Objects (often pretty-printed) written back to back.
    Concatenated,
}

impl std::fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseStrategy::WholeArray => write!(f, "json-array"),
            ParseStrategy::JsonLines => write!(f, "jsonl"),
            ParseStrategy::Concatenated => write!(f, "concatenated"),
        }
    }
}

/// Output of [`parse`]: the records plus the strategy that produced them.
///
/// `strategy` is `None` only for empty (whitespace-only) input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parsed {
    pub strategy: Option<ParseStrategy>,
    pub records: Vec<LogRecord>,
}

impl Parsed {
    fn new(strategy: ParseStrategy, records: Vec<LogRecord>) -> Self {
        Self {
            strategy: Some(strategy),
            records,
        }
    }
}

/// Parse `content` into records, trying each framing in priority order.
pub fn parse(content: &str) -> Parsed {
    let content = trim(content);
    if content.is_empty() {
        return Parsed::default();
    }

    if let Some(records) = parse_whole_array(content) {
        tracing::debug!(records = records.len(), "parsed artifact as a JSON array");
        return Parsed::new(ParseStrategy::WholeArray, records);
    }

    if let Some(records) = parse_json_lines(content) {
        tracing::debug!(records = records.len(), "parsed artifact as JSON Lines");
        return Parsed::new(ParseStrategy::JsonLines, records);
    }

    let records = parse_concatenated(content);
    tracing::debug!(
        records = records.len(),
        "parsed artifact as concatenated objects"
    );
    Parsed::new(ParseStrategy::Concatenated, records)
}

/// Shorthand for `parse(content).records`.
pub fn parse_records(content: &str) -> Vec<LogRecord> {
    parse(content).records
}

/// Whitespace trim that also drops a byte-order mark.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Decode `content` as one array. Only attempted when the (trimmed) text is
/// bracketed; a decode failure falls through rather than retrying.
fn parse_whole_array(content: &str) -> Option<Vec<LogRecord>> {
    if !(content.starts_with('[') && content.ends_with(']')) {
        return None;
    }
    match serde_json::from_str::<Vec<Value>>(content) {
        Ok(records) => Some(records),
        Err(err) => {
            tracing::debug!(error = %err, "not a JSON array, falling through");
            None
        }
    }
}

/// Decode every non-empty line independently. A single bad line rejects the
/// whole strategy; partially valid input is not salvaged here.
fn parse_json_lines(content: &str) -> Option<Vec<LogRecord>> {
    let mut records = Vec::new();
    for (lineno, line) in content
        .split('\n')
        .map(trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
    {
        match serde_json::from_str::<Value>(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::debug!(
                    line = lineno + 1,
                    error = %err,
                    "not JSON Lines, falling through"
                );
                return None;
            }
        }
    }
    Some(records)
}

/// Slice out every top-level `{…}` span by brace depth and decode each one.
///
/// Braces inside string literals are counted like any other brace. A stray
/// `}` drives the depth negative, and no span is emitted until the braces
/// rebalance. Spans that fail to decode are dropped.
fn parse_concatenated(content: &str) -> Vec<LogRecord> {
    let mut records = Vec::new();
    let mut depth = 0isize;
    let mut start = 0usize;

    for (i, b) in content.bytes().enumerate() {
        match b {
            b'{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let chunk = &content[start..=i];
                    match serde_json::from_str::<Value>(chunk) {
                        Ok(record) => records.push(record),
                        Err(err) => tracing::trace!(
                            offset = start,
                            error = %err,
                            "dropping undecodable chunk"
                        ),
                    }
                }
            }
            _ => {}
        }
    }

    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
