//! Domain-specific assertion macros for gemkit harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which stage of the log pipeline misbehaved.

/// Assert that a parsed artifact used `strategy` and yielded `count` records.
///
/// ```rust
/// assert_parsed!(parse(text), ParseStrategy::JsonLines, 3);
/// ```
#[macro_export]
macro_rules! assert_parsed {
    ($parsed:expr, $strategy:expr, $count:expr) => {{
        let parsed: &gemkit_core::Parsed = &$parsed;
        let expected: gemkit_core::ParseStrategy = $strategy;
        if parsed.strategy != Some(expected) {
            panic!(
                "assert_parsed! failed: wrong strategy\n  expected: {:?}\n  actual:   {:?}\n  records: {}",
                expected,
                parsed.strategy,
                parsed.records.len()
            );
        }
        pretty_assertions::assert_eq!(
            parsed.records.len(),
            $count,
            "assert_parsed! failed: wrong record count for {:?}",
            expected
        );
    }};
}

/// Assert that no top-level stripped field remains on any record.
#[macro_export]
macro_rules! assert_stripped {
    ($records:expr) => {{
        for (i, record) in $records.iter().enumerate() {
            let record: &serde_json::Value = record;
            for field in gemkit_core::STRIPPED_FIELDS.iter() {
                if record.get(*field).is_some() {
                    panic!(
                        "assert_stripped! failed: record {} still has {:?}\n  record: {}",
                        i, field, record
                    );
                }
            }
        }
    }};
}

/// Assert that the rendered output contains exactly `n` documents.
///
/// Each document is pretty-printed, so it starts with `{` or `[` in column 0
/// and every nested line is indented.
#[macro_export]
macro_rules! assert_document_count {
    ($output:expr, $n:expr) => {{
        let output: &str = &$output;
        let starts = output
            .lines()
            .filter(|l| l.starts_with('{') || l.starts_with('['))
            .count();
        pretty_assertions::assert_eq!(
            starts,
            $n,
            "assert_document_count! failed\n  output:\n{}",
            output
        );
    }};
}
