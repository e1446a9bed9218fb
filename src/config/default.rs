//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Homeboard Configuration
#
# This file was auto-generated with default values.
# Uncomment and modify options to customize your dashboard.
#
# Location: $XDG_CONFIG_HOME/homeboard/config.toml

[storage]

# Directory holding the persisted tile collection.
# Empty means the platform data directory:
#   Linux: ~/.local/share/homeboard
#   macOS: ~/Library/Application Support/homeboard
# Tilde (~) is expanded to your home directory.
data_dir = ""

[log]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
# The HOMEBOARD_LOG environment variable overrides this value.
level = "info"
"#;

/// Creates the default config file, backing up any existing one when
/// `force` is set.
///
/// Returns the path the file was written to.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` when a config file exists and
/// `force` is false, or `ConfigError::WriteError` for I/O failures.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup = path.with_extension("toml.bak");
        fs::copy(&path, &backup).map_err(|e| ConfigError::WriteError {
            path: backup,
            source: e,
        })?;
    }

    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: xdg::config_dir(),
        source: e,
    })?;

    fs::write(&path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
