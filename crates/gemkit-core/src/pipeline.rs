//! Pipeline: sequences the stages and produces the filtered log.
//!
//! ```text
//! read ─► normalizer::parse ─► matcher::is_relevant ─► strip_fields ─► denormalize ─► render ─► write
//! ```
//!
//! Relevance is decided on the record exactly as parsed, before anything is
//! stripped or decoded.

use std::path::Path;

use crate::denormalize::denormalize;
use crate::error::{Error, Result};
use crate::matcher::is_relevant;
use crate::normalizer::{self, ParseStrategy};
use crate::strip::strip_fields;
use crate::types::LogRecord;

/// What one pipeline run did.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineReport {
    /// Framing the artifact was parsed with; `None` for empty input.
    pub strategy: Option<ParseStrategy>,
    /// Records parsed from the artifact.
    pub parsed: usize,
    /// Records written to the output.
    pub retained: usize,
    /// The first parsed record, kept only when records were parsed but none
    /// were retained, so the operator can see what the artifact looks like.
    pub first_record: Option<LogRecord>,
}

impl PipelineReport {
    /// Records were parsed but none matched.
    pub fn nothing_matched(&self) -> bool {
        self.parsed > 0 && self.retained == 0
    }
}

/// Keep the relevant records, then strip and denormalise each one.
pub fn filter_records(records: Vec<LogRecord>) -> Vec<LogRecord> {
    records
        .into_iter()
        .filter(is_relevant)
        .map(|r| denormalize(strip_fields(r)))
        .collect()
}

/// Pretty-print each record and join them with a single newline.
///
/// The result is neither a JSON array nor strict JSONL: each document may
/// span several lines.
pub fn render(records: &[LogRecord]) -> Result<String> {
    let docs = records
        .iter()
        .map(serde_json::to_string_pretty)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(docs.join("\n"))
}

/// Run every stage over in-memory text. Returns the report and the rendered
/// output.
pub fn normalize(content: &str) -> Result<(PipelineReport, String)> {
    let parsed = normalizer::parse(content);
    let strategy = parsed.strategy;
    let mut records = parsed.records;
    let count = records.len();

    // A relevant first record is always retained, so only an irrelevant one
    // can end up in the diagnostic.
    let first_irrelevant = records.first().is_some_and(|r| !is_relevant(r));
    let first = first_irrelevant.then(|| records.remove(0));

    let kept = filter_records(records);
    let output = render(&kept)?;

    let report = PipelineReport {
        strategy,
        parsed: count,
        retained: kept.len(),
        first_record: first.filter(|_| kept.is_empty()),
    };

    tracing::debug!(
        strategy = ?report.strategy,
        parsed = report.parsed,
        retained = report.retained,
        "pipeline finished"
    );
    Ok((report, output))
}

/// Read `input`, run [`normalize`], and write the result to `output`.
///
/// The output file is written even when nothing was retained.
pub fn run(input: &Path, output: &Path) -> Result<PipelineReport> {
    let content = std::fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let (report, rendered) = normalize(&content)?;

    std::fs::write(output, rendered).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(report)
}
