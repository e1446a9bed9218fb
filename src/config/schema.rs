//! TOML configuration schema types for homeboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`, so a partial or empty file parses cleanly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::xdg;

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [storage]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Durable store location settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub log: LogConfig,
}

impl Config {
    /// Resolves the effective data directory for the tile store.
    ///
    /// An explicit `storage.data_dir` (with `~` expanded) wins; otherwise
    /// the platform data directory is used.
    pub fn data_dir(&self) -> PathBuf {
        match self.storage.data_dir.as_deref() {
            Some(dir) if !dir.is_empty() => xdg::expand_tilde(dir),
            _ => xdg::data_dir(),
        }
    }
}

/// Durable store location settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted tile collection.
    /// Empty or absent means the platform data directory
    /// (`$XDG_DATA_HOME/homeboard` or equivalent). Tilde is expanded.
    pub data_dir: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity level. The `HOMEBOARD_LOG` environment variable, when
    /// set, takes precedence over this value.
    pub level: LogLevel,
}

/// Logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Returns the level as a tracing filter directive.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
