//! Configuration management for Datemark.
//!
//! Configuration is loaded from a platform config directory with sensible
//! defaults. All config structs implement `Default`, so a missing file is
//! never an error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Datemark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Watermark appearance and placement
    pub watermark: WatermarkConfig,

    /// Font resolution
    pub font: FontConfig,

    /// Input discovery settings
    pub processing: ProcessingConfig,

    /// Output location settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.datemark.datemark/config.toml
    /// - Linux: ~/.config/datemark/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\datemark\config\config.toml
    ///
    /// Falls back to ~/.datemark/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "datemark", "datemark")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".datemark").join("config.toml")
            })
    }

    /// Get the resolved preferred font path (with ~ expansion), if configured.
    pub fn font_path(&self) -> Option<PathBuf> {
        self.font.path.as_ref().map(|p| {
            let raw = p.to_string_lossy().into_owned();
            let expanded = shellexpand::tilde(&raw);
            PathBuf::from(expanded.into_owned())
        })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
