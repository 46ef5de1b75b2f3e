//! Application configuration.
//!
//! The configuration is loaded from `config.json` in the per-user config
//! directory (`%APPDATA%\wifiscanner` on Windows,
//! `$XDG_CONFIG_HOME/wifiscanner` elsewhere).  Every section is optional
//! and unknown keys are ignored, so a minimal `{}` file is valid.
//!
//! # Example
//!
//! ```json
//! {
//!   "viewport": { "width": 1024.0, "height": 480.0 },
//!   "output": { "format": "json" }
//! }
//! ```

use crate::network::Viewport;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Canvas size folded into scan results until a front-end reports its
    /// real size.
    #[serde(default)]
    pub viewport: Viewport,

    /// How results are printed.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Default location of the config file, if a config directory can be
    /// determined.
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("wifiscanner").join("config.json"))
    }
}

/// Per-user configuration base directory.
fn config_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        return std::env::var_os("APPDATA").map(PathBuf::from);
    }
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
