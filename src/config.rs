//! Configuration file handling for iascii.
//!
//! Loads configuration from `~/.config/iascii/config.toml` or a custom path.
//! Command-line flags take precedence over anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 70;

/// Configuration file structure for iascii.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub camera: CameraSection,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RenderSection {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CameraSection {
    #[serde(default)]
    pub device: u32,
    #[serde(default)]
    pub mirror: bool,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path, or the default path if `None`.
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("iascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/iascii/config.toml")
        })
}
