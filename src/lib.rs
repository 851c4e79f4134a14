//! duolog - Dual-channel leveled logging with environment-derived configuration
//!
//! This crate provides two independent log channels (debug and info) with:
//! - A process-wide level threshold adjustable at runtime
//! - Per-channel destinations: standard output or append-only files
//! - Bitmask-driven line formatting (date, time, microseconds,
//!   call-site file, UTC), with per-channel overrides falling back to a
//!   process-wide default mask
//! - A configuration snapshot read once at startup from `DUOLOG_*`
//!   environment variables or a TOML file
//!
//! Construct a [`Logger`] per component for isolated state, or use the
//! free functions and macros, which share a lazily created process-wide
//! instance.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Per-channel state machine: sink, flag mask, lazily bound formatter
mod channel;

/// Line rendering for bound formatters
mod format;

/// Configuration snapshot consumed at logger construction
pub mod config;

/// Error types for destination and configuration failures
pub mod error;

/// Formatting-flag bitmask and csv resolver
pub mod flags;

/// Process-wide default logger and fatal termination
pub mod global;

/// Level threshold enumeration
pub mod level;

/// The logger façade object
pub mod logger;

/// Print-style logging macros
mod macros;

/// Destination-token resolution and the sink type
pub mod sink;

// Core exports
pub use config::Settings;
pub use error::LogError;
pub use flags::FormatFlags;
pub use global::{
    debug, default_logger, fatal, info, set_debug_flags, set_debug_output,
    set_debug_output_direct, set_default_flags, set_info_flags, set_info_output,
    set_info_output_direct, set_level,
};
pub use level::Level;
pub use logger::Logger;
pub use sink::{OUT_STDOUT, Sink};
