//! Configuration file watcher for hot-reloading.
//!
//! Watches the configuration file and reloads the live store in place when it
//! changes. No restart is needed: every snap reads the store when it runs.

use std::ffi::OsString;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use super::store::ConfigStore;
use super::types::RecenterConfig;

/// Debounce duration for config file changes.
/// Some editors trigger multiple events per save (write to temp, rename, etc.).
const CONFIG_DEBOUNCE_MS: u64 = 200;

/// Starts watching the store's file on a background thread.
///
/// `on_change` runs on the watcher thread after a reload that changed the
/// configuration.
pub fn watch_config_file<F>(store: &'static ConfigStore, on_change: F)
where F: Fn(&RecenterConfig) + Send + 'static {
    let Some(config_path) = store.path().map(Path::to_path_buf) else {
        // Nothing loaded from disk, nothing to watch
        return;
    };

    let config_filename = config_path.file_name().map(OsString::from).unwrap_or_default();

    crate::utils::thread::spawn_named_thread("config-watcher", move || {
        let (tx, rx) = mpsc::channel();

        let mut watcher: RecommendedWatcher = match notify::recommended_watcher(tx) {
            Ok(w) => w,
            Err(err) => {
                tracing::warn!(error = %err, "failed to create config watcher");
                return;
            }
        };

        // Watch the parent directory to catch file replacements
        // (some editors save by writing to a temp file then renaming)
        let watch_path = config_path.parent().unwrap_or(&config_path);

        if let Err(err) = watcher.watch(watch_path, RecursiveMode::NonRecursive) {
            tracing::warn!(error = %err, path = %watch_path.display(), "failed to watch config file");
            return;
        }

        let debounce = Duration::from_millis(CONFIG_DEBOUNCE_MS);

        loop {
            match rx.recv() {
                Ok(Ok(event)) => {
                    if !affects_file(&event, &config_filename) {
                        continue;
                    }

                    // Wait until the burst of events for one save has settled
                    if !wait_for_quiet(&rx, debounce) {
                        break;
                    }

                    match store.reload() {
                        Ok(true) => {
                            let config = store.get();
                            tracing::info!(
                                margin = config.horizontal_snap_margin,
                                auto_snap = config.auto_snap,
                                "configuration reloaded"
                            );
                            on_change(&config);
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to reload configuration, keeping previous values");
                        }
                    }
                }
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "config watch error");
                }
                Err(_) => {
                    // Channel closed, watcher dropped
                    break;
                }
            }
        }
    });
}

/// Returns whether a file-system event touches the configuration file.
fn affects_file(event: &Event, filename: &OsString) -> bool {
    event.paths.iter().any(|p| p.file_name().is_some_and(|name| name == filename.as_os_str()))
}

/// Drains events until none arrive for `debounce`. Returns `false` if the
/// channel closed.
fn wait_for_quiet<T>(rx: &mpsc::Receiver<T>, debounce: Duration) -> bool {
    loop {
        match rx.recv_timeout(debounce) {
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout) => return true,
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }
}
