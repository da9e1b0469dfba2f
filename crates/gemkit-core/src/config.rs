//! Settings for the `log` command.
//!
//! [`Settings::load`] reads `<project root>/.gemini/settings.json`, the same
//! file the Gemini CLI reads. That file tolerates `//` and `/* */` comments,
//! so they are stripped before the text is handed to the `config` crate.
//! Only `telemetry.outfile` matters here; every other key is ignored.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Directory (under the project root) holding the settings file.
pub const SETTINGS_DIR: &str = ".gemini";
/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "settings.json";
/// File name used for the filtered log when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "out.log";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level contents of `settings.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub telemetry: Option<TelemetrySettings>,
}

/// `telemetry` section of `settings.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub outfile: Option<String>,
}

impl Settings {
    /// Load `<project_root>/.gemini/settings.json`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = settings_path(project_root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file");
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&raw)
            .map(Some)
            .map_err(|source| Error::Settings { path, source })
    }

    /// Parse settings from (possibly commented) JSON text.
    pub fn from_json(raw: &str) -> std::result::Result<Self, config::ConfigError> {
        let stripped = strip_comments(raw);
        config::Config::builder()
            .add_source(config::File::from_str(&stripped, config::FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    /// The configured telemetry outfile, with an empty string treated as unset.
    pub fn telemetry_outfile(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|t| t.outfile.as_deref())
            .filter(|s| !s.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// The project root: `$INIT_CWD` when a package runner set it, else the
/// current working directory.
pub fn project_root() -> std::io::Result<PathBuf> {
    match std::env::var_os("INIT_CWD") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => std::env::current_dir(),
    }
}

pub fn settings_path(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Resolve the telemetry artifact path from settings.
///
/// Relative outfiles are taken relative to `project_root`. The file must
/// exist.
pub fn resolve_telemetry_path(project_root: &Path, settings: Option<&Settings>) -> Result<PathBuf> {
    let outfile = settings
        .and_then(Settings::telemetry_outfile)
        .ok_or(Error::OutfileNotConfigured)?;

    let path = absolutize(project_root, Path::new(outfile));
    if !path.exists() {
        return Err(Error::ArtifactNotFound(path));
    }
    Ok(path)
}

/// `out.log` next to the telemetry artifact.
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_FILE)
}

/// The output path: `requested` (relative to `cwd`) if given, otherwise
/// [`default_output_path`].
pub fn resolve_output_path(input: &Path, requested: Option<&Path>, cwd: &Path) -> PathBuf {
    match requested {
        Some(path) => absolutize(cwd, path),
        None => default_output_path(input),
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

// ---------------------------------------------------------------------------
// Comment stripping
// ---------------------------------------------------------------------------

fn comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A `//` preceded by `:` or `\` is not a comment, so URLs survive.
    RE.get_or_init(|| {
        Regex::new(r"(?m)/\*[\s\S]*?\*/|([^\\:]|^)//.*$").expect("comment regex must compile")
    })
}

fn strip_comments(raw: &str) -> String {
    comment_re().replace_all(raw, "${1}").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
