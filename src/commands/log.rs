// ---------------------------------------------------------------------------
// `gemkit log`
// ---------------------------------------------------------------------------

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gemkit_core::config::{self, Settings};
use gemkit_core::{pipeline, PipelineReport};

/// Arguments accepted by `gemkit log`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogArgs {
    /// Where to write the filtered log (default: out.log next to the telemetry file).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Directories the command resolves paths against.
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Root holding `.gemini/settings.json`; relative outfiles resolve here.
    pub project_root: PathBuf,
    /// Working directory; a relative `--output` resolves here.
    pub cwd: PathBuf,
}

impl LogContext {
    /// Context for the running process.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            project_root: config::project_root().context("cannot determine project root")?,
            cwd: std::env::current_dir().context("cannot determine working directory")?,
        })
    }
}

/// Filter the configured telemetry file into a readable log.
///
/// Progress and the final counts go to `out`. Configuration problems and a
/// missing telemetry file fail before anything is written.
pub fn handle_log_command(
    args: &LogArgs,
    ctx: &LogContext,
    out: &mut impl Write,
) -> anyhow::Result<PipelineReport> {
    let settings = Settings::load(&ctx.project_root)?;
    let input = config::resolve_telemetry_path(&ctx.project_root, settings.as_ref())?;
    let output = config::resolve_output_path(&input, args.output.as_deref(), &ctx.cwd);

    writeln!(out, "Reading telemetry from: {}", input.display())?;
    writeln!(out, "Writing filtered log to: {}", output.display())?;

    let report = pipeline::run(&input, &output)?;
    print_report(&report, &output, out)?;
    Ok(report)
}

fn print_report(report: &PipelineReport, output: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "Processed {} items. Wrote {} items to {}",
        report.parsed,
        report.retained,
        output.display()
    )?;

    if let Some(first) = &report.first_record {
        writeln!(
            out,
            "First item structure: {}",
            serde_json::to_string_pretty(first)?
        )?;
    }
    Ok(())
}
