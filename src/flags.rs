// src/flags.rs
//! Formatting-flag bitmask and the comma-separated-name resolver
//!
//! Flag lists arrive as human-readable csv strings ("date,time,UTC").
//! Unknown names are dropped silently, and the empty string is the
//! distinguished "unset" marker meaning a channel inherits the
//! process-wide default mask rather than an explicitly empty one.

use bitflags::bitflags;

bitflags! {
    /// Bitmask selecting which metadata fields a formatter prepends
    /// to each log line.
    pub struct FormatFlags: u32 {
        /// Calendar date, rendered `YYYY/MM/DD `
        const DATE = 1 << 0;
        /// Wall-clock time, rendered `HH:MM:SS `
        const TIME = 1 << 1;
        /// Extend the time field with `.NNNNNN` sub-second precision;
        /// implies the time field even when `TIME` is absent
        const MICROSECONDS = 1 << 2;
        /// Final path component of the call site, `file.rs:line: `
        const SHORT_FILE = 1 << 3;
        /// Full path of the call site; loses to `SHORT_FILE` when both
        /// bits are set
        const LONG_FILE = 1 << 4;
        /// Render date/time fields in UTC instead of local time
        const UTC = 1 << 5;

        /// Baseline used when the process defaults themselves resolve
        /// to unset (date + time)
        const STANDARD = Self::DATE.bits | Self::TIME.bits;
    }
}

/// Resolves a comma-separated flag list into a mask.
///
/// Returns `None` for the empty string (the unset sentinel). Any other
/// input yields `Some(mask)`: each token is trimmed and looked up in the
/// fixed name table, unknown names are skipped, so an input made only of
/// unknown names resolves to `Some(empty)` — explicitly no formatting,
/// distinct from unset.
pub fn resolve(csv: &str) -> Option<FormatFlags> {
    if csv.is_empty() {
        return None;
    }

    let mut mask = FormatFlags::empty();
    for token in csv.split(',') {
        if let Some(flag) = flag_for_name(token.trim()) {
            // OR is idempotent, duplicates need no special handling
            mask |= flag;
        }
    }
    Some(mask)
}

/// Fixed flag-name table. Names are exact, including the capitalized `UTC`.
fn flag_for_name(name: &str) -> Option<FormatFlags> {
    match name {
        "date" => Some(FormatFlags::DATE),
        "time" => Some(FormatFlags::TIME),
        "microseconds" => Some(FormatFlags::MICROSECONDS),
        "shortfile" => Some(FormatFlags::SHORT_FILE),
        "longfile" => Some(FormatFlags::LONG_FILE),
        "UTC" => Some(FormatFlags::UTC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_unset() {
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn unknown_names_yield_explicit_empty_mask() {
        assert_eq!(resolve("bogus"), Some(FormatFlags::empty()));
        assert_eq!(resolve("nope,also-nope"), Some(FormatFlags::empty()));
    }

    #[test]
    fn known_names_or_together() {
        let mask = resolve("date,time,UTC").unwrap();
        assert_eq!(mask, FormatFlags::DATE | FormatFlags::TIME | FormatFlags::UTC);
    }

    #[test]
    fn tokens_are_trimmed_and_unknowns_skipped() {
        let mask = resolve(" date , junk ,shortfile").unwrap();
        assert_eq!(mask, FormatFlags::DATE | FormatFlags::SHORT_FILE);
    }

    #[test]
    fn duplicates_are_idempotent() {
        assert_eq!(resolve("date,date,date"), resolve("date"));
    }

    #[test]
    fn flag_names_are_case_sensitive() {
        // the table matches exact tokens; "utc" is not "UTC"
        assert_eq!(resolve("utc"), Some(FormatFlags::empty()));
        assert_eq!(resolve("UTC"), Some(FormatFlags::UTC));
    }
}
