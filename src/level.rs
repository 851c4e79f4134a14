// src/level.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity threshold for the two log channels
///
/// Levels are ordered: a message is emitted only when the logger's
/// current level is greater than or equal to the message's level, so
/// `Info` silences the debug channel and `None` silences both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Suppress all channel output
    None = 0,

    /// Emit informational output only
    Info = 1,

    /// Emit both informational and debug output
    Debug = 2,
}

impl Level {
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::None,
            1 => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::None => write!(f, "none"),
            Level::Info => write!(f, "info"),
            Level::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "none" => Ok(Level::None),
            "1" | "info" => Ok(Level::Info),
            "2" | "debug" => Ok(Level::Debug),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}
