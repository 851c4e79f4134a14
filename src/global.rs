// src/global.rs
//! Process-wide default logger and its convenience front
//!
//! The default [`Logger`] is constructed lazily from the `DUOLOG_*`
//! environment snapshot on first use. The free functions here mirror
//! the logger's methods one-to-one so application code can log without
//! threading a logger instance around; anything that needs an isolated
//! instance (tests, embedded components) constructs its own [`Logger`].

use crate::config::Settings;
use crate::error::LogError;
use crate::flags::FormatFlags;
use crate::format::Formatter;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use lazy_static::lazy_static;
use std::io::{self, Write as _};
use std::panic::Location;
use std::process;

lazy_static! {
    static ref DEFAULT_LOGGER: Logger = Logger::from_settings(&Settings::from_env());
}

/// Returns the process-wide default logger.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Updates the default logger's level threshold.
pub fn set_level(level: Level) {
    DEFAULT_LOGGER.set_level(level);
}

/// Redirects the default logger's debug channel to a destination token.
pub fn set_debug_output(token: &str) -> Result<(), LogError> {
    DEFAULT_LOGGER.set_debug_output(token)
}

/// Redirects the default logger's info channel to a destination token.
pub fn set_info_output(token: &str) -> Result<(), LogError> {
    DEFAULT_LOGGER.set_info_output(token)
}

/// Redirects the default logger's debug channel to an open sink.
pub fn set_debug_output_direct(sink: Sink) {
    DEFAULT_LOGGER.set_debug_output_direct(sink);
}

/// Redirects the default logger's info channel to an open sink.
pub fn set_info_output_direct(sink: Sink) {
    DEFAULT_LOGGER.set_info_output_direct(sink);
}

/// Replaces the default logger's process-default flag list.
pub fn set_default_flags(csv: &str) {
    DEFAULT_LOGGER.set_default_flags(csv);
}

/// Replaces the default logger's debug-channel flag list.
pub fn set_debug_flags(csv: &str) {
    DEFAULT_LOGGER.set_debug_flags(csv);
}

/// Replaces the default logger's info-channel flag list.
pub fn set_info_flags(csv: &str) {
    DEFAULT_LOGGER.set_info_flags(csv);
}

/// Writes a message to the default logger's debug channel.
#[track_caller]
pub fn debug(message: impl AsRef<str>) {
    DEFAULT_LOGGER.debug(message);
}

/// Writes a message to the default logger's info channel.
#[track_caller]
pub fn info(message: impl AsRef<str>) {
    DEFAULT_LOGGER.info(message);
}

/// Writes a message to standard error and terminates the process.
///
/// Bypasses both channels and the level threshold entirely: a fatal
/// message is always emitted, stamped with the date+time baseline, and
/// the process exits with status 1. Intended for unrecoverable startup
/// failures in calling code.
#[track_caller]
pub fn fatal(message: impl AsRef<str>) -> ! {
    let line = Formatter::new("", FormatFlags::STANDARD)
        .render(message.as_ref(), Location::caller());
    let _ = io::stderr().write_all(line.as_bytes());
    process::exit(1);
}
