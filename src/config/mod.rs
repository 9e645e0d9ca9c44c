// SPDX-License-Identifier: MPL-2.0
//! This module handles the banner configuration, including loading and saving
//! the global defaults to a `banners.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Auto-hide delay and animation durations
//! - `[appearance]` - Banner opacity
//! - `[behavior]` - Tap-to-dismiss
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ALERT_BANNERS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use alert_banners::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Disable auto-hide
//! config.timing.seconds_to_show = Some(0.0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "banners.toml";

/// Warning key returned by [`load`] when an existing file could not be parsed.
pub const LOAD_ERROR_WARNING: &str = "banner-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Auto-hide and animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Seconds a banner stays visible; <= 0 disables auto-hide.
    #[serde(
        default = "default_seconds_to_show",
        skip_serializing_if = "Option::is_none"
    )]
    pub seconds_to_show: Option<f64>,

    /// Entrance and forward re-flow duration in seconds.
    #[serde(
        default = "default_show_animation_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_animation_secs: Option<f64>,

    /// Exit and backward re-flow duration in seconds.
    #[serde(
        default = "default_hide_animation_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_animation_secs: Option<f64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            seconds_to_show: default_seconds_to_show(),
            show_animation_secs: default_show_animation_secs(),
            hide_animation_secs: default_hide_animation_secs(),
        }
    }
}

/// Banner appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Banner opacity (0.0 to 1.0).
    #[serde(default = "default_opacity", skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
        }
    }
}

/// Interaction behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    /// Whether tapping a banner dismisses it.
    #[serde(
        default = "default_allow_tap_to_dismiss",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_tap_to_dismiss: Option<bool>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            allow_tap_to_dismiss: default_allow_tap_to_dismiss(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Banner configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Auto-hide and animation timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Banner appearance.
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Interaction behavior.
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_seconds_to_show() -> Option<f64> {
    Some(DEFAULT_SECONDS_TO_SHOW)
}

fn default_show_animation_secs() -> Option<f64> {
    Some(DEFAULT_SHOW_ANIMATION_SECS)
}

fn default_hide_animation_secs() -> Option<f64> {
    Some(DEFAULT_HIDE_ANIMATION_SECS)
}

fn default_opacity() -> Option<f32> {
    Some(DEFAULT_BANNER_OPACITY)
}

fn default_allow_tap_to_dismiss() -> Option<bool> {
    Some(DEFAULT_ALLOW_TAP_TO_DISMISS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
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
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "falling back to default banner config"
                    );
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
