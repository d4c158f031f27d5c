//! Configuration management for the application.
//!
//! This module handles loading and saving workshop defaults in TOML format
//! with platform-specific directory resolution. CLI flags override file
//! values, which override the built-in defaults.

use crate::constants::{APP_NAME, EXPORT_FILENAME};
use crate::models::RenderOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default filename for saved PNG files
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/QRCraft/config.toml`
/// - macOS: `~/Library/Application Support/QRCraft/config.toml`
/// - Windows: `%APPDATA%\QRCraft\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Render defaults applied when CLI flags are omitted
    #[serde(default)]
    pub render: RenderOptions,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/QRCraft/`
    /// - macOS: `~/Library/Application Support/QRCraft/`
    /// - Windows: `%APPDATA%\QRCraft\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let tmp_path = config_path.with_extension("toml.tmp");
        fs::write(&tmp_path, &content).context(format!(
            "Failed to write config file: {}",
            tmp_path.display()
        ))?;
        fs::rename(&tmp_path, &config_path).context(format!(
            "Failed to move config file into place: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}
