//! Live configuration store.
//!
//! Holds the configuration the running app plans with. The menu bar writes
//! through [`ConfigStore::update`], which persists to the loaded file; the
//! watcher calls [`ConfigStore::reload`] when the file is edited by hand.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::types::{ConfigError, RecenterConfig, load_config_from_path};

/// Configuration plus the file it is persisted to.
#[derive(Debug, Default)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    current: RwLock<RecenterConfig>,
}

impl ConfigStore {
    /// Creates a store. A store without a path keeps changes in memory only.
    #[must_use]
    pub fn new(config: RecenterConfig, path: Option<PathBuf>) -> Self {
        Self {
            path,
            current: RwLock::new(config.normalized()),
        }
    }

    /// Loads a store from an existing file.
    ///
    /// # Errors
    ///
    /// Returns the error from [`load_config_from_path`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = load_config_from_path(path)?;
        Ok(Self::new(config, Some(path.to_path_buf())))
    }

    /// Returns a snapshot of the current configuration.
    #[must_use]
    pub fn get(&self) -> RecenterConfig { self.current.read().clone() }

    /// Returns the file changes are persisted to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    /// Applies `change`, normalizes the result and persists it.
    ///
    /// The in-memory value is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn update<F>(&self, change: F) -> Result<RecenterConfig, ConfigError>
    where F: FnOnce(&mut RecenterConfig) {
        let updated = {
            let mut current = self.current.write();
            change(&mut current);
            *current = current.clone().normalized();
            current.clone()
        };

        self.save(&updated)?;
        Ok(updated)
    }

    /// Re-reads the file and returns whether the configuration changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed; the current
    /// configuration is kept in that case.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(false);
        };

        let config = load_config_from_path(path)?;
        let mut current = self.current.write();
        if *current == config {
            return Ok(false);
        }

        *current = config;
        Ok(true)
    }

    fn save(&self, config: &RecenterConfig) -> Result<(), ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = serde_json::to_string_pretty(config)?;
        contents.push('\n');
        fs::write(path, contents)?;

        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_normalizes_initial_config() {
        let store = ConfigStore::new(
            RecenterConfig {
                horizontal_snap_margin: -10.0,
                auto_snap: true,
            },
            None,
        );
        assert_eq!(store.get().horizontal_snap_margin, 0.0);
    }

    #[test]
    fn test_update_without_path_stays_in_memory() {
        let store = ConfigStore::default();
        let updated = store.update(|config| config.auto_snap = false).unwrap();
        assert!(!updated.auto_snap);
        assert!(!store.get().auto_snap);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_update_persists_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        let store = ConfigStore::new(RecenterConfig::default(), Some(path.clone()));

        store.update(|config| config.horizontal_snap_margin = 160.0).unwrap();

        let reloaded = ConfigStore::load_from(&path).unwrap();
        assert_eq!(reloaded.get().horizontal_snap_margin, 160.0);
        assert!(reloaded.get().auto_snap);
    }

    #[test]
    fn test_update_clamps_margin() {
        let store = ConfigStore::default();
        let updated = store.update(|config| config.horizontal_snap_margin = -1.0).unwrap();
        assert_eq!(updated.horizontal_snap_margin, 0.0);
    }

    #[test]
    fn test_reload_detects_external_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{}").unwrap();
        let store = ConfigStore::load_from(&path).unwrap();

        assert!(!store.reload().unwrap());

        fs::write(&path, "// edited\n{ \"horizontalSnapMargin\": 40 }").unwrap();
        assert!(store.reload().unwrap());
        assert_eq!(store.get().horizontal_snap_margin, 40.0);
    }

    #[test]
    fn test_reload_keeps_config_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{ \"horizontalSnapMargin\": 120 }").unwrap();
        let store = ConfigStore::load_from(&path).unwrap();

        fs::write(&path, "{ broken").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.get().horizontal_snap_margin, 120.0);
    }

    #[test]
    fn test_reload_without_path_is_noop() {
        let store = ConfigStore::default();
        assert!(!store.reload().unwrap());
    }
}
