// src/sink.rs
//! Destination-token resolution
//!
//! A destination token is either the literal `STDOUT` sentinel or a
//! file-system path. Paths are opened for append and created when
//! absent; existing content is never truncated.

use crate::error::LogError;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination token meaning the process's standard output stream
pub const OUT_STDOUT: &str = "STDOUT";

/// An open, write-only destination for formatted log bytes
pub type Sink = Box<dyn Write + Send>;

/// Resolves a destination token into an open sink.
///
/// # Arguments
/// * `token` - [`OUT_STDOUT`] or a file path
///
/// # Returns
/// * `Ok(Sink)` - standard output, or the file opened append/create
/// * `Err(LogError::Open)` - the path could not be opened
pub fn resolve(token: &str) -> Result<Sink, LogError> {
    if token == OUT_STDOUT {
        return Ok(Box::new(io::stdout()));
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(token)
        .map_err(|source| LogError::Open {
            path: PathBuf::from(token),
            source,
        })?;

    Ok(Box::new(file))
}
