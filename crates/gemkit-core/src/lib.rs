//! Core library for gemkit: the telemetry log pipeline behind `gemkit log`.
//!
//! This crate exposes each stage of the log pipeline as a public module, plus
//! the shared types and the settings reader used by the `log` command.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Normalizer ──► Matcher ──► Strip ──► Denormalize ──► output
//!                  │                                                   ▲
//!                  └──────────────── Pipeline (counts, report) ────────┘
//! ```
//!
//! Every stage is synchronous and operates on [`serde_json::Value`] records;
//! the only I/O happens in [`pipeline::run`] (one read, one write) and in
//! [`config::Settings::load`].

pub mod config;
pub mod denormalize;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod strip;
pub mod types;

pub use error::{Error, Result};
pub use normalizer::{ParseStrategy, Parsed};
pub use pipeline::PipelineReport;
pub use types::{LogRecord, ATTRIBUTE_KEYS, STRIPPED_FIELDS};
