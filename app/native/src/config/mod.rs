//! Configuration module for Recenter.
//!
//! This module provides configuration types, loading functionality, the live
//! store the app plans with, and file watching for hot-reloading.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

mod store;
pub mod template;
pub mod types;
mod watcher;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use store::ConfigStore;
pub use types::{
    ConfigError, DEFAULT_HORIZONTAL_SNAP_MARGIN, RecenterConfig, clamp_margin, config_paths,
    load_config as load_config_default, load_config_from_path,
};
pub use watcher::watch_config_file;

/// Global configuration store, loaded once at startup.
static STORE: OnceLock<ConfigStore> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `init()` or `get_config()` to take effect.
///
/// # Returns
///
/// `true` if the path was set successfully, `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk.
///
/// Falls back to defaults when loading fails. If no configuration file exists
/// and `create_template` is set, creates a template configuration file and
/// persists future changes there. Otherwise the store has no path.
fn load_or_default(create_template: bool) -> ConfigStore {
    let result = match CUSTOM_CONFIG_PATH.get() {
        Some(path) => load_config_from_path(path).map(|config| (config, path.clone())),
        None => load_config_default(),
    };

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            ConfigStore::new(config, Some(path))
        }
        Err(ConfigError::NotFound) if create_template => {
            let path = CUSTOM_CONFIG_PATH.get().cloned().or_else(create_default_config_file);
            ConfigStore::new(RecenterConfig::default(), path)
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            ConfigStore::new(RecenterConfig::default(), None)
        }
        Err(err) => {
            // Keep the broken file untouched: no path means menu changes stay in memory
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            ConfigStore::new(RecenterConfig::default(), None)
        }
    }
}

/// Creates a template configuration file at the default location.
///
/// Returns the path on success.
fn create_default_config_file() -> Option<PathBuf> {
    let Some(config_path) = config_paths().into_iter().next() else {
        tracing::debug!("no config path available for creating template");
        return None;
    };

    match template::create_config_file(&config_path) {
        Ok(()) => {
            tracing::info!(path = %config_path.display(), "created default configuration file");
            Some(config_path)
        }
        Err(err) => {
            tracing::debug!(
                error = %err,
                path = %config_path.display(),
                "failed to create default configuration file"
            );
            None
        }
    }
}

/// Initializes and returns the global configuration store.
///
/// Never touches the filesystem beyond reading. This function is idempotent -
/// calling it multiple times returns the same store.
pub fn init() -> &'static ConfigStore { STORE.get_or_init(|| load_or_default(false)) }

/// Initializes the global store for the desktop app, writing the template
/// configuration file on first run.
pub fn init_with_template() -> &'static ConfigStore {
    STORE.get_or_init(|| load_or_default(true))
}

/// Returns a snapshot of the current configuration, initializing the store if necessary.
pub fn get_config() -> RecenterConfig { init().get() }

/// Returns the path the configuration is persisted to, if any.
pub fn get_config_path() -> Option<PathBuf> { init().path().map(std::path::Path::to_path_buf) }
