//! Subcommand handlers for the `gemkit` binary.

pub mod log;

pub use log::{handle_log_command, LogArgs, LogContext};
