// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[snackbar]` - Auto-hide delay, transition length, diagnostics buffer size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set the `ICED_SNACKBAR_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.snackbar.auto_hide_ms = Some(2_500);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::banner::{AutoHideDuration, TransitionDelay};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedSnackbar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNACKBAR_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Snackbar behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    /// Auto-hide delay in milliseconds. Zero or negative disables auto-hide.
    #[serde(default = "default_auto_hide_ms", skip_serializing_if = "Option::is_none")]
    pub auto_hide_ms: Option<i64>,

    /// Open/close transition length in milliseconds.
    #[serde(default = "default_transition_ms", skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Number of diagnostic events kept in memory.
    #[serde(
        default = "default_diagnostics_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
            transition_ms: default_transition_ms(),
            diagnostics_capacity: default_diagnostics_capacity(),
        }
    }
}

impl SnackbarConfig {
    /// Auto-hide delay as a validated duration.
    #[must_use]
    pub fn auto_hide(&self) -> AutoHideDuration {
        self.auto_hide_ms
            .map_or(AutoHideDuration::DISABLED, AutoHideDuration::from_millis)
    }

    /// Transition length, clamped to the supported range.
    #[must_use]
    pub fn transition_delay(&self) -> TransitionDelay {
        self.transition_ms
            .map_or_else(TransitionDelay::default, TransitionDelay::from_millis)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Snackbar behavior settings.
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_ms() -> Option<i64> {
    Some(DEFAULT_AUTO_HIDE_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_diagnostics_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            snackbar: SnackbarConfig {
                auto_hide_ms: Some(2_000),
                transition_ms: Some(250),
                diagnostics_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"light\"\n")
            .expect("partial config should parse");

        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.snackbar, SnackbarConfig::default());
    }

    #[test]
    fn non_positive_auto_hide_disables_timer() {
        let snackbar = SnackbarConfig {
            auto_hide_ms: Some(0),
            ..SnackbarConfig::default()
        };
        assert!(!snackbar.auto_hide().is_enabled());

        let snackbar = SnackbarConfig {
            auto_hide_ms: None,
            ..SnackbarConfig::default()
        };
        assert!(!snackbar.auto_hide().is_enabled());
    }

    #[test]
    fn transition_delay_is_clamped() {
        let snackbar = SnackbarConfig {
            transition_ms: Some(1),
            ..SnackbarConfig::default()
        };
        assert_eq!(
            snackbar.transition_delay().as_duration(),
            Duration::from_millis(MIN_TRANSITION_MS)
        );
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
