// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the coordinator's `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toast]` - Toast timeout
//! - `[menu]` / `[dialog]` - Transition durations
//! - `[backdrop]` - Fade and backdrop-click durations
//! - `[aside]` - Aside panel transition
//! - `[layout]` - Narrow/wide breakpoint
//!
//! Every field is optional. Missing fields fall back to the constants in
//! [`defaults`]; out-of-range values are clamped when the settings are turned
//! into newtypes by [`OverlaySettings::from_config`](crate::overlay::OverlaySettings::from_config).
//!
//! # Examples
//!
//! ```no_run
//! use overlay_coordinator::config;
//!
//! let (mut config, _warning) = config::load();
//! config.toast.timeout_secs = Some(3.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Seconds before a toast starts fading.
    #[serde(
        default = "default_toast_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<f32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_toast_timeout_secs(),
        }
    }
}

/// Menu settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    #[serde(
        default = "default_menu_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<f32>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_menu_duration_secs(),
        }
    }
}

/// Dialog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogConfig {
    #[serde(
        default = "default_dialog_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<f32>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_dialog_duration_secs(),
        }
    }
}

/// Backdrop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackdropConfig {
    /// Fade-out before the backdrop is hidden.
    #[serde(default = "default_backdrop_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u32>,

    /// Menu transition used when the backdrop itself is clicked.
    #[serde(
        default = "default_backdrop_click_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub click_duration_secs: Option<f32>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            fade_ms: default_backdrop_fade_ms(),
            click_duration_secs: default_backdrop_click_duration_secs(),
        }
    }
}

/// Aside panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AsideConfig {
    #[serde(default = "default_aside_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

impl Default for AsideConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_aside_duration_ms(),
        }
    }
}

/// Responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_breakpoint_px", skip_serializing_if = "Option::is_none")]
    pub breakpoint_px: Option<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Coordinator configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub dialog: DialogConfig,

    #[serde(default)]
    pub backdrop: BackdropConfig,

    #[serde(default)]
    pub aside: AsideConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_timeout_secs() -> Option<f32> {
    Some(DEFAULT_TOAST_TIMEOUT_SECS)
}

fn default_menu_duration_secs() -> Option<f32> {
    Some(DEFAULT_MENU_DURATION_SECS)
}

fn default_dialog_duration_secs() -> Option<f32> {
    Some(DEFAULT_DIALOG_DURATION_SECS)
}

fn default_backdrop_fade_ms() -> Option<u32> {
    Some(DEFAULT_BACKDROP_FADE_MS)
}

fn default_backdrop_click_duration_secs() -> Option<f32> {
    Some(DEFAULT_BACKDROP_CLICK_DURATION_SECS)
}

fn default_aside_duration_ms() -> Option<u32> {
    Some(DEFAULT_ASIDE_DURATION_MS)
}

fn default_breakpoint_px() -> Option<u32> {
    Some(DEFAULT_BREAKPOINT_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). A missing file is not
/// an error; an unreadable one yields the defaults plus [`LOAD_ERROR_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
