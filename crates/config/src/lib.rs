//! Configuration management for arbor.
//!
//! `config.toml` lives under `$XDG_CONFIG_HOME/arbor`; the default log file
//! under `$XDG_CACHE_HOME/arbor`.

pub mod constants;
mod settings;

pub use settings::{Config, GeneralSettings, KeybindingSettings, LoggingSettings, UniversalKeys};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "default";
    pub const LANGUAGE: &str = "auto";
    pub const SELECT_KEY: &str = "<space>";
    pub const REMOVE_KEY: &str = "d";
    pub const NEXT_ITEM_KEY: &str = "j";
    pub const PREV_ITEM_KEY: &str = "k";
    pub const RETURN_KEY: &str = "<esc>";
    pub const QUIT_KEY: &str = "q";
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "arbor.log";
}

const APP_DIR: &str = "arbor";

impl Config {
    /// Load configuration from the user config file.
    ///
    /// On first run, creates config file with default values.
    /// Auto-completes missing keys with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::validate_content(&original_content)?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;

        // If content changed, save the updated config
        if original_content != normalized_content {
            config.save_to(config_path)?;
        }

        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.toml"))
            .context("Failed to determine config directory")
    }

    /// `[logging] file_path` when set, else `arbor.log` in the cache
    /// directory, else in the system temp directory.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(path) = &self.logging.file_path {
            return PathBuf::from(path);
        }
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(defaults::LOG_FILE_NAME)
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}
