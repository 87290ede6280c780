//! Configuration types for Recenter.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal margin used when none is configured, in points.
pub const DEFAULT_HORIZONTAL_SNAP_MARGIN: f64 = 80.0;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RecenterConfig {
    /// Gap kept on the left and right of a snapped window, in points.
    /// Negative values are treated as 0. The gap shrinks automatically on
    /// narrow displays so a snapped window is never narrower than 240 points.
    /// Default: 80
    #[schemars(range(min = 0))]
    pub horizontal_snap_margin: f64,

    /// Snap the window of every newly launched application.
    /// When disabled, only the keyboard shortcut and the menu item snap.
    /// Default: true
    pub auto_snap: bool,
}

impl Default for RecenterConfig {
    fn default() -> Self {
        Self {
            horizontal_snap_margin: DEFAULT_HORIZONTAL_SNAP_MARGIN,
            auto_snap: true,
        }
    }
}

impl RecenterConfig {
    /// Returns the margin to plan with: clamped to `>= 0`, default when not finite.
    #[must_use]
    pub fn horizontal_margin(&self) -> f64 { clamp_margin(self.horizontal_snap_margin) }

    /// Returns a copy with every value brought into its valid range.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.horizontal_snap_margin = self.horizontal_margin();
        self
    }
}

/// Clamps a margin to `>= 0`, falling back to the default for NaN or infinity.
#[must_use]
pub fn clamp_margin(margin: f64) -> f64 {
    if margin.is_finite() {
        margin.max(0.0)
    } else {
        DEFAULT_HORIZONTAL_SNAP_MARGIN
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur when loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/recenter/config.jsonc \
         or ~/Library/Application Support/recenter/config.jsonc"
    )]
    NotFound,
    /// The configuration file exists but could not be read or written.
    #[error("Failed to access configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Directory name under each configuration root.
const CONFIG_DIR_NAME: &str = "recenter";

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/recenter/` when the variable is set
/// 2. `~/.config/recenter/`
/// 3. `~/Library/Application Support/recenter/` (macOS native)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        roots.push(PathBuf::from(xdg_config));
    }

    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".config"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        roots.push(config_dir);
    }

    let mut paths = Vec::new();
    for root in roots {
        let dir = root.join(CONFIG_DIR_NAME);
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config itself
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, and
/// `ConfigError::ParseError` if it is not valid JSONC.
pub fn load_config_from_path(path: &Path) -> Result<RecenterConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: RecenterConfig = serde_json::from_reader(reader)?;
    Ok(config.normalized())
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the
/// expected locations, or the error from [`load_config_from_path`] for the first
/// file that exists.
pub fn load_config() -> Result<(RecenterConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = load_config_from_path(&path)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}
