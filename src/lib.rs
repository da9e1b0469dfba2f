//! gemkit: Gemini Kit command-line tooling.
//!
//! The binary is a thin clap shell over [`commands`]; the pipeline itself
//! lives in [`gemkit_core`]. Exposed as a library so integration tests can
//! drive commands without spawning a process.

pub mod commands;
