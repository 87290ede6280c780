//! Desktop app: a menu bar agent that snaps windows.
//!
//! Wires the platform bindings to the snap service:
//!
//! - launch notifications and the global shortcut feed [`service`]
//! - the tray menu edits the configuration and triggers manual snaps
//! - configuration changes on disk refresh the tray in place

mod hotkey;
mod service;
mod tray;

use crate::config;
use crate::constants::{APP_NAME, SNAP_SHORTCUT_LABEL};
use crate::error::RecenterError;
use crate::platform::{accessibility, workspace};

/// Runs the menu bar app until the user quits.
///
/// # Errors
///
/// Returns an error if Tauri fails to start.
pub fn run() -> Result<(), RecenterError> {
    let store = config::init_with_template();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
            tracing::info!("{APP_NAME} is already running");
        }))
        .plugin(hotkey::create_hotkey_plugin())
        .setup(move |app| {
            // Menu bar only: no Dock icon, no app switcher entry
            if let Err(err) = app.handle().set_activation_policy(tauri::ActivationPolicy::Accessory)
            {
                tracing::warn!(error = %err, "failed to set activation policy");
            }

            accessibility::check_and_prompt();
            service::start();

            if let Err(err) = workspace::watch_launches(service::on_app_launched) {
                tracing::warn!(error = %err, "auto-snap unavailable");
            }

            tray::init(app.handle())?;

            let handle = app.handle().clone();
            config::watch_config_file(store, move |_| {
                let target = handle.clone();
                if let Err(err) = handle.run_on_main_thread(move || tray::refresh(&target)) {
                    tracing::warn!(error = %err, "failed to schedule tray refresh");
                }
            });

            tracing::info!(shortcut = SNAP_SHORTCUT_LABEL, "{APP_NAME} is running");
            Ok(())
        })
        .run(tauri::generate_context!())
        .map_err(|err| RecenterError::PlatformError(err.to_string()))
}
