// src/format.rs
//! Line rendering for a bound channel formatter
//!
//! A [`Formatter`] holds the channel's literal prefix tag and the
//! resolved flag mask, and renders each message into its final line:
//! `{date }{time }[TAG]\t{file:line: }{message}\n`. Timestamp fields
//! come ahead of the tag, the call-site field sits between the tag and
//! the message, and exactly one trailing newline is guaranteed.

use crate::flags::FormatFlags;
use chrono::{Local, NaiveDateTime, Utc};
use std::fmt::Write as _;
use std::panic::Location;

/// Renders messages for one channel, bound to a prefix tag and a
/// resolved flag mask.
///
/// The mask stored here is already resolved — the channel-or-default
/// precedence is decided before a formatter is bound, and setters push
/// a freshly resolved mask into the existing formatter in place.
#[derive(Debug)]
pub(crate) struct Formatter {
    prefix: &'static str,
    flags: FormatFlags,
}

impl Formatter {
    pub(crate) fn new(prefix: &'static str, flags: FormatFlags) -> Self {
        Formatter { prefix, flags }
    }

    /// Replaces the flag mask without rebinding the formatter.
    pub(crate) fn set_flags(&mut self, flags: FormatFlags) {
        self.flags = flags;
    }

    /// Renders one complete log line for `message` originating at `site`.
    pub(crate) fn render(&self, message: &str, site: &Location<'_>) -> String {
        let mut line = String::with_capacity(message.len() + 48);
        self.push_timestamp(&mut line);
        line.push_str(self.prefix);
        self.push_location(&mut line, site);
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn push_timestamp(&self, line: &mut String) {
        let wants_date = self.flags.contains(FormatFlags::DATE);
        // microseconds implies the time field
        let wants_time = self
            .flags
            .intersects(FormatFlags::TIME | FormatFlags::MICROSECONDS);
        if !wants_date && !wants_time {
            return;
        }

        let now = self.now();
        if wants_date {
            let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
        }
        if wants_time {
            if self.flags.contains(FormatFlags::MICROSECONDS) {
                let _ = write!(line, "{} ", now.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(line, "{} ", now.format("%H:%M:%S"));
            }
        }
    }

    fn push_location(&self, line: &mut String, site: &Location<'_>) {
        let short = self.flags.contains(FormatFlags::SHORT_FILE);
        let long = self.flags.contains(FormatFlags::LONG_FILE);
        if !short && !long {
            return;
        }

        let file = site.file();
        // shortfile wins when both bits are stored
        let name = if short {
            file.rsplit(['/', '\\']).next().unwrap_or(file)
        } else {
            file
        };
        let _ = write!(line, "{}:{}: ", name, site.line());
    }

    fn now(&self) -> NaiveDateTime {
        if self.flags.contains(FormatFlags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[track_caller]
    fn here() -> &'static Location<'static> {
        Location::caller()
    }

    #[test]
    fn bare_mask_renders_tag_and_message_only() {
        let formatter = Formatter::new("[INFO]\t", FormatFlags::empty());
        assert_eq!(formatter.render("hello", here()), "[INFO]\thello\n");
    }

    #[test]
    fn date_field_precedes_the_tag() {
        let formatter = Formatter::new("[INFO]\t", FormatFlags::DATE);
        let line = formatter.render("hello", here());
        let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \[INFO\]\thello\n$").unwrap();
        assert!(pattern.is_match(&line), "got: {:?}", line);
    }

    #[test]
    fn standard_mask_renders_date_and_time() {
        let formatter = Formatter::new("[DEBUG]\t", FormatFlags::STANDARD);
        let line = formatter.render("x", here());
        let pattern =
            Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \[DEBUG\]\tx\n$").unwrap();
        assert!(pattern.is_match(&line), "got: {:?}", line);
    }

    #[test]
    fn microseconds_implies_time() {
        let formatter = Formatter::new("[INFO]\t", FormatFlags::MICROSECONDS);
        let line = formatter.render("x", here());
        let pattern = Regex::new(r"^\d{2}:\d{2}:\d{2}\.\d{6} \[INFO\]\tx\n$").unwrap();
        assert!(pattern.is_match(&line), "got: {:?}", line);
    }

    #[test]
    fn shortfile_beats_longfile() {
        let both = FormatFlags::SHORT_FILE | FormatFlags::LONG_FILE;
        let formatter = Formatter::new("[DEBUG]\t", both);
        let line = formatter.render("x", here());
        assert!(line.contains("format.rs:"), "got: {:?}", line);
        assert!(!line.contains("src/format.rs:"), "got: {:?}", line);
    }

    #[test]
    fn longfile_renders_the_full_path() {
        let formatter = Formatter::new("[DEBUG]\t", FormatFlags::LONG_FILE);
        let line = formatter.render("x", here());
        assert!(line.contains("src/format.rs:"), "got: {:?}", line);
    }

    #[test]
    fn trailing_newline_is_not_doubled() {
        let formatter = Formatter::new("[INFO]\t", FormatFlags::empty());
        let line = formatter.render("done\n", here());
        assert_eq!(line, "[INFO]\tdone\n");
    }

    #[test]
    fn utc_flag_alone_changes_nothing() {
        let formatter = Formatter::new("[INFO]\t", FormatFlags::UTC);
        assert_eq!(formatter.render("x", here()), "[INFO]\tx\n");
    }
}
