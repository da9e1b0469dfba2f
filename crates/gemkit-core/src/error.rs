//! Error taxonomy for gemkit-core.
//!
//! Only conditions that stop the `log` command before or after processing
//! live here. Chunks that fail to decode during the concatenated-object scan,
//! and strings that fail to decode during denormalisation, are recovered in
//! place and never become an [`Error`].

use std::path::PathBuf;

/// Fatal errors surfaced to the operator as a single message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No settings file, or no `telemetry.outfile` inside it.
    #[error("Telemetry outfile not configured in settings.json")]
    OutfileNotConfigured,

    /// The settings file exists but is not valid (commented) JSON.
    #[error("Failed to parse settings file {}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// The configured telemetry file does not exist.
    #[error("Telemetry file not found at {}", .0.display())]
    ArtifactNotFound(PathBuf),

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize record")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
