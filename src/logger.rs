// src/logger.rs
//! The logger façade: an explicit context object holding both channels
//!
//! A [`Logger`] owns two independently configured channels (debug and
//! info), a process-wide level threshold, and the default flag mask
//! channels fall back to. Each channel's (sink, mask, formatter) triple
//! sits behind its own mutex so reconfiguration is atomic with respect
//! to concurrent writes; the level and default mask are lock-free
//! atomics read before every write.

use crate::channel::ChannelState;
use crate::config::Settings;
use crate::error::LogError;
use crate::flags::{self, FormatFlags};
use crate::level::Level;
use crate::sink::{self, Sink};
use std::io;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

const DEBUG_PREFIX: &str = "[DEBUG]\t";
const INFO_PREFIX: &str = "[INFO]\t";

/// Dual-channel leveled logger.
///
/// Construct one per test or component, or use the process-wide
/// instance behind the crate's free functions and macros. All
/// configuration is adjustable at runtime; once a setter returns,
/// every subsequent write on that channel observes the new
/// configuration.
pub struct Logger {
    level: AtomicU8,
    default_flags: AtomicU32,
    debug: Mutex<ChannelState>,
    info: Mutex<ChannelState>,
}

impl Logger {
    /// Creates a logger with default settings: both channels to
    /// standard output, level `Debug`, no explicit flag masks.
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    /// Creates a logger from a configuration snapshot.
    ///
    /// A destination that fails to open is reported on standard error
    /// and replaced by standard output — startup configuration problems
    /// are never fatal.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults =
            flags::resolve(&settings.default_flags).unwrap_or(FormatFlags::STANDARD);

        Logger {
            level: AtomicU8::new(settings.level.as_u8()),
            default_flags: AtomicU32::new(defaults.bits()),
            debug: Mutex::new(ChannelState::new(
                DEBUG_PREFIX,
                open_or_stdout(&settings.debug_out),
                flags::resolve(&settings.debug_flags),
            )),
            info: Mutex::new(ChannelState::new(
                INFO_PREFIX,
                open_or_stdout(&settings.info_out),
                flags::resolve(&settings.info_flags),
            )),
        }
    }

    /// Updates the level threshold at runtime.
    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::SeqCst);
    }

    /// Returns the current level threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Redirects the debug channel to a destination token
    /// ([`sink::OUT_STDOUT`] or a file path).
    ///
    /// On failure the channel keeps its current sink and formatter, a
    /// diagnostic goes to standard error, and the error is returned.
    pub fn set_debug_output(&self, token: &str) -> Result<(), LogError> {
        self.set_output(&self.debug, token)
    }

    /// Redirects the info channel to a destination token.
    ///
    /// Same failure semantics as [`set_debug_output`](Self::set_debug_output).
    pub fn set_info_output(&self, token: &str) -> Result<(), LogError> {
        self.set_output(&self.info, token)
    }

    /// Redirects the debug channel to an already-open sink. Cannot fail.
    pub fn set_debug_output_direct(&self, sink: Sink) {
        lock(&self.debug).set_sink(sink);
    }

    /// Redirects the info channel to an already-open sink. Cannot fail.
    pub fn set_info_output_direct(&self, sink: Sink) {
        lock(&self.info).set_sink(sink);
    }

    /// Replaces the process-default flag mask from a comma-separated
    /// flag list. An empty list resolves to the date+time baseline, so
    /// the defaults a channel falls back to are always concrete.
    ///
    /// Channels whose formatter is already bound keep their resolved
    /// mask until their own `set_*_flags` is called again.
    pub fn set_default_flags(&self, csv: &str) {
        let mask = flags::resolve(csv).unwrap_or(FormatFlags::STANDARD);
        self.default_flags.store(mask.bits(), Ordering::SeqCst);
    }

    /// Replaces the debug channel's flag list. An empty list unsets the
    /// channel's own mask so it inherits the process default.
    pub fn set_debug_flags(&self, csv: &str) {
        let parsed = flags::resolve(csv);
        let defaults = self.default_flags();
        lock(&self.debug).set_flags(parsed, defaults);
    }

    /// Replaces the info channel's flag list. An empty list unsets the
    /// channel's own mask so it inherits the process default.
    pub fn set_info_flags(&self, csv: &str) {
        let parsed = flags::resolve(csv);
        let defaults = self.default_flags();
        lock(&self.info).set_flags(parsed, defaults);
    }

    /// Writes a pre-rendered message to the debug channel, gated on the
    /// current level. The call site recorded for the `shortfile` /
    /// `longfile` flags is the caller of this method.
    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        let site = Location::caller();
        self.write(Level::Debug, &self.debug, message.as_ref(), site);
    }

    /// Writes a pre-rendered message to the info channel, gated on the
    /// current level.
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        let site = Location::caller();
        self.write(Level::Info, &self.info, message.as_ref(), site);
    }

    fn write(
        &self,
        level: Level,
        channel: &Mutex<ChannelState>,
        message: &str,
        site: &Location<'_>,
    ) {
        if self.level() < level {
            return;
        }
        // defaults resolve at bind time only; a bound channel skips the load
        lock(channel).write_line(message, site, || self.default_flags());
    }

    fn set_output(&self, channel: &Mutex<ChannelState>, token: &str) -> Result<(), LogError> {
        match sink::resolve(token) {
            Ok(sink) => {
                lock(channel).set_sink(sink);
                Ok(())
            }
            Err(err) => {
                // best-effort diagnostic on the fallback channel
                eprintln!("duolog: {}", err);
                Err(err)
            }
        }
    }

    fn default_flags(&self) -> FormatFlags {
        FormatFlags::from_bits_truncate(self.default_flags.load(Ordering::SeqCst))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks a channel, recovering from poisoning. A logger keeps logging
/// after an unrelated thread panicked mid-write.
fn lock(channel: &Mutex<ChannelState>) -> MutexGuard<'_, ChannelState> {
    channel.lock().unwrap_or_else(PoisonError::into_inner)
}

fn open_or_stdout(token: &str) -> Sink {
    match sink::resolve(token) {
        Ok(sink) => sink,
        Err(err) => {
            eprintln!("duolog: {}; using {}", err, sink::OUT_STDOUT);
            Box::new(io::stdout())
        }
    }
}
