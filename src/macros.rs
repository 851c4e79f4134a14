// src/macros.rs
//! Print-style macro front over the default logger
//!
//! Two shapes per operation, matching the façade contract: the plain
//! macros space-join their arguments' `Display` output, the `*f` macros
//! apply format-string substitution. Arguments are rendered before the
//! level gate runs — the threshold check is a simple comparison, not a
//! deferred-evaluation optimization. Each macro expands to a single
//! `#[track_caller]` call, so the `shortfile`/`longfile` flags report
//! the invocation site.

/// Space-joins its arguments into one message.
#[doc(hidden)]
#[macro_export]
macro_rules! __duolog_join {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let parts: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::string::ToString::to_string(&$arg)),+];
        parts.join(" ")
    }};
}

/// Logs to the debug channel, space-joining the arguments.
///
/// ```
/// duolog::debug!("worker", 3, "started");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::debug($crate::__duolog_join!($($arg),*))
    };
}

/// Logs to the debug channel with format-string substitution.
///
/// ```
/// duolog::debugf!("worker {} started", 3);
/// ```
#[macro_export]
macro_rules! debugf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::debug(::std::format!($fmt $(, $arg)*))
    };
}

/// Logs to the info channel, space-joining the arguments.
#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::info($crate::__duolog_join!($($arg),*))
    };
}

/// Logs to the info channel with format-string substitution.
#[macro_export]
macro_rules! infof {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::info(::std::format!($fmt $(, $arg)*))
    };
}

/// Writes to standard error and terminates the process, space-joining
/// the arguments. Ignores channels and the level threshold.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::fatal($crate::__duolog_join!($($arg),*))
    };
}

/// Writes to standard error with format-string substitution and
/// terminates the process.
#[macro_export]
macro_rules! fatalf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::fatal(::std::format!($fmt $(, $arg)*))
    };
}
