//! Global snap shortcut.

use tauri::Runtime;
use tauri::plugin::TauriPlugin;
use tauri_plugin_global_shortcut::{Builder, Shortcut, ShortcutState};

use super::service;
use crate::constants::SNAP_SHORTCUT;
use crate::snap::SnapCommand;

/// Creates the global-shortcut plugin with the snap shortcut registered.
///
/// Falls back to a plugin without shortcuts when registration fails, so the
/// rest of the app keeps working.
pub fn create_hotkey_plugin<R: Runtime>() -> TauriPlugin<R> {
    let shortcut = match SNAP_SHORTCUT.parse::<Shortcut>() {
        Ok(shortcut) => shortcut,
        Err(err) => {
            tracing::warn!(shortcut = SNAP_SHORTCUT, error = %err, "invalid snap shortcut");
            return Builder::<R>::new().build();
        }
    };

    let builder = match Builder::<R>::new().with_shortcut(shortcut) {
        Ok(builder) => builder,
        Err(err) => {
            tracing::warn!(shortcut = SNAP_SHORTCUT, error = %err, "failed to register snap shortcut");
            return Builder::<R>::new().build();
        }
    };

    builder
        .with_handler(|_app, _shortcut, event| {
            // Only trigger on key press, not release
            if event.state == ShortcutState::Pressed {
                tracing::debug!("snap shortcut pressed");
                service::send(SnapCommand::SnapFrontmost);
            }
        })
        .build()
}
