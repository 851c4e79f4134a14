// src/channel.rs
//! Per-channel mutable state and its formatter lifecycle
//!
//! Each channel owns a sink, its own mask-or-unset value, and a
//! formatter slot with exactly two states: `Unbound` until the first
//! write, then `Bound` for the rest of the process lifetime. Binding
//! resolves the channel's effective mask (its own if set, else the
//! process default) once; later flag or sink changes mutate the bound
//! state in place and never rebuild it.

use crate::flags::FormatFlags;
use crate::format::Formatter;
use crate::sink::Sink;
use std::io::Write as _;
use std::panic::Location;

/// Two-state formatter slot. `Bound` is never left once entered.
#[derive(Debug)]
enum FormatterSlot {
    Unbound,
    Bound(Formatter),
}

/// Mutable state for one log channel (debug or info).
pub(crate) struct ChannelState {
    prefix: &'static str,
    sink: Sink,
    /// Channel's own mask; `None` inherits the process default
    flags: Option<FormatFlags>,
    formatter: FormatterSlot,
}

impl ChannelState {
    pub(crate) fn new(prefix: &'static str, sink: Sink, flags: Option<FormatFlags>) -> Self {
        ChannelState {
            prefix,
            sink,
            flags,
            formatter: FormatterSlot::Unbound,
        }
    }

    /// Replaces the channel's sink.
    ///
    /// The formatter holds no sink reference, so a bound formatter is
    /// redirected by this swap without being rebuilt.
    pub(crate) fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    /// Stores the channel's own mask-or-unset value and, when the
    /// formatter is already bound, pushes the recomputed effective mask
    /// into it in place.
    pub(crate) fn set_flags(&mut self, flags: Option<FormatFlags>, defaults: FormatFlags) {
        self.flags = flags;
        if let FormatterSlot::Bound(formatter) = &mut self.formatter {
            formatter.set_flags(self.flags.unwrap_or(defaults));
        }
    }

    /// Renders and writes one message, binding the formatter on first use.
    ///
    /// The process defaults are taken lazily and resolved only while
    /// the slot is still `Unbound` (and the channel has no mask of its
    /// own) — once bound, the mask lives in the formatter and defaults
    /// cannot influence output.
    ///
    /// Write failures are swallowed: logging is best-effort and a full
    /// disk or closed pipe must not take the process down.
    pub(crate) fn write_line(
        &mut self,
        message: &str,
        site: &Location<'_>,
        defaults: impl FnOnce() -> FormatFlags,
    ) {
        if matches!(self.formatter, FormatterSlot::Unbound) {
            let effective = self.flags.unwrap_or_else(defaults);
            self.formatter = FormatterSlot::Bound(Formatter::new(self.prefix, effective));
        }

        if let FormatterSlot::Bound(formatter) = &self.formatter {
            let line = formatter.render(message, site);
            let _ = self.sink.write_all(line.as_bytes());
            let _ = self.sink.flush();
        }
    }
}
