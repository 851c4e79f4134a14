// src/config.rs
use crate::error::LogError;
use crate::level::Level;
use crate::sink;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Configuration snapshot consumed once when a logger is constructed
///
/// Contains the startup state of both channels: destination tokens,
/// the global level threshold, and the three flag lists (process
/// default plus one override per channel). Snapshots come from the
/// process environment via [`Settings::from_env`], from a TOML file
/// via [`Settings::load`], or are built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Destination token for the debug channel
    /// (default: the `STDOUT` sentinel)
    #[serde(default = "default_out")]
    pub debug_out: String,

    /// Destination token for the info channel
    /// (default: the `STDOUT` sentinel)
    #[serde(default = "default_out")]
    pub info_out: String,

    /// Global level threshold (default: `debug`)
    #[serde(default = "default_level")]
    pub level: Level,

    /// Comma-separated flag list channels fall back to when they have
    /// no override (default: empty, resolving to date+time)
    #[serde(default)]
    pub default_flags: String,

    /// Debug-channel flag list override (default: empty, inherit)
    #[serde(default)]
    pub debug_flags: String,

    /// Info-channel flag list override (default: empty, inherit)
    #[serde(default)]
    pub info_flags: String,
}

fn default_out() -> String {
    sink::OUT_STDOUT.into()
}

fn default_level() -> Level {
    Level::Debug
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug_out: default_out(),
            info_out: default_out(),
            level: default_level(),
            default_flags: String::new(),
            debug_flags: String::new(),
            info_flags: String::new(),
        }
    }
}

impl Settings {
    /// Prefix of the environment variables [`from_env`](Self::from_env) reads
    pub const ENV_PREFIX: &'static str = "DUOLOG_";

    /// Builds a snapshot from `DUOLOG_*` environment variables.
    ///
    /// Recognized variables: `DUOLOG_DEBUG_OUT`, `DUOLOG_INFO_OUT`,
    /// `DUOLOG_LEVEL`, `DUOLOG_DEFAULT_FLAGS`, `DUOLOG_DEBUG_FLAGS`,
    /// `DUOLOG_INFO_FLAGS`. A malformed level is reported on standard
    /// error and replaced by the default — configuration problems at
    /// process start are never fatal.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();

        if let Some(value) = env_var("DEBUG_OUT") {
            settings.debug_out = value;
        }
        if let Some(value) = env_var("INFO_OUT") {
            settings.info_out = value;
        }
        if let Some(value) = env_var("LEVEL") {
            match value.parse::<Level>() {
                Ok(level) => settings.level = level,
                Err(err) => eprintln!(
                    "duolog: ignoring {}LEVEL: {}",
                    Self::ENV_PREFIX,
                    err
                ),
            }
        }
        if let Some(value) = env_var("DEFAULT_FLAGS") {
            settings.default_flags = value;
        }
        if let Some(value) = env_var("DEBUG_FLAGS") {
            settings.debug_flags = value;
        }
        if let Some(value) = env_var("INFO_FLAGS") {
            settings.info_flags = value;
        }

        settings
    }

    /// Loads a snapshot from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the settings file (TOML format)
    ///
    /// # Returns
    /// * `Ok(Settings)` - Successfully loaded snapshot
    /// * `Err(LogError)` - If the file couldn't be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LogError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| {
            LogError::Config(format!(
                "Failed to read settings at {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&text)
            .map_err(|e| LogError::Config(format!("Invalid settings format: {}", e)))
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{}{}", Settings::ENV_PREFIX, name)).ok()
}
