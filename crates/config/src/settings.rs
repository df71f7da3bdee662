//! Configuration structures for arbor settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Key bindings
    #[serde(default)]
    pub keybinding: KeybindingSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Interface language (en, ru, or auto)
    #[serde(default = "default_language")]
    pub language: String,
}

/// Key binding sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeybindingSettings {
    /// Bindings shared by every list panel
    #[serde(default)]
    pub universal: UniversalKeys,
}

/// Keys shared by every list panel.
///
/// Values are key strings such as `d`, `<space>` or `<c-d>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalKeys {
    /// Act on the selected item (enter a worktree)
    #[serde(default = "default_select_key")]
    pub select: String,

    /// Remove the selected item
    #[serde(default = "default_remove_key")]
    pub remove: String,

    /// Move selection down
    #[serde(default = "default_next_item_key")]
    pub next_item: String,

    /// Move selection up
    #[serde(default = "default_prev_item_key")]
    pub prev_item: String,

    /// Return to the previous repository
    #[serde(default = "default_return_key", rename = "return")]
    pub return_key: String,

    /// Quit the application
    #[serde(default = "default_quit_key")]
    pub quit: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_language() -> String {
    defaults::LANGUAGE.to_string()
}

fn default_select_key() -> String {
    defaults::SELECT_KEY.to_string()
}

fn default_remove_key() -> String {
    defaults::REMOVE_KEY.to_string()
}

fn default_next_item_key() -> String {
    defaults::NEXT_ITEM_KEY.to_string()
}

fn default_prev_item_key() -> String {
    defaults::PREV_ITEM_KEY.to_string()
}

fn default_return_key() -> String {
    defaults::RETURN_KEY.to_string()
}

fn default_quit_key() -> String {
    defaults::QUIT_KEY.to_string()
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            language: default_language(),
        }
    }
}

impl Default for UniversalKeys {
    fn default() -> Self {
        Self {
            select: default_select_key(),
            remove: default_remove_key(),
            next_item: default_next_item_key(),
            prev_item: default_prev_item_key(),
            return_key: default_return_key(),
            quit: default_quit_key(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
