// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the logging crate
///
/// Covers the two failure modes the logger can surface: a destination
/// file that cannot be opened, and a malformed configuration source.
/// Everything else in the crate is total — flag parsing drops unknown
/// tokens instead of rejecting them, and writes are best-effort.
#[derive(Error, Debug)]
pub enum LogError {
    /// A log destination could not be opened for append
    #[error("Failed to open log destination {path}: {source}")]
    Open {
        /// Path of the destination that failed to open
        path: PathBuf,
        /// Underlying OS error (permissions, missing parent, ...)
        source: io::Error,
    },

    /// Configuration file or snapshot errors
    #[error("Configuration error: {0}")]
    Config(String),
}
