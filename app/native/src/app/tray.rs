//! Menu bar item.
//!
//! The tray icon itself is declared in `tauri.conf.json`; this module builds its
//! menu from the current configuration and handles the menu actions. The menu is
//! rebuilt after every change so check marks always mirror the stored state.

use tauri::menu::{CheckMenuItem, IsMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{AppHandle, Runtime};

use super::service;
use crate::config;
use crate::constants::{APP_NAME, SNAP_SHORTCUT, TRAY_ID};
use crate::error::RecenterError;
use crate::platform::{accessibility, alert, login_item, workspace};
use crate::snap::SnapCommand;

const SNAP_ID: &str = "snap";
const AUTO_SNAP_ID: &str = "auto-snap";
const MARGIN_MENU_ID: &str = "margin";
const MARGIN_ID_PREFIX: &str = "margin-";
const LOGIN_ITEM_ID: &str = "login-item";
const ACCESSIBILITY_ID: &str = "accessibility";
const QUIT_ID: &str = "quit";

/// Margins offered in the "Horizontal Margin" submenu, in points.
pub const MARGIN_PRESETS: [u32; 6] = [0, 40, 80, 120, 160, 240];

/// Attaches the menu to the configured tray icon and starts handling its events.
///
/// # Errors
///
/// Returns an error if the tray icon is missing or the menu cannot be built.
pub fn init<R: Runtime>(app: &AppHandle<R>) -> Result<(), RecenterError> {
    let tray = app
        .tray_by_id(TRAY_ID)
        .ok_or_else(|| RecenterError::PlatformError(format!("tray icon '{TRAY_ID}' not found")))?;

    tray.set_menu(Some(build_menu(app).map_err(platform_error)?)).map_err(platform_error)?;
    tray.set_show_menu_on_left_click(true).map_err(platform_error)?;
    app.on_menu_event(handle_menu_event);

    tracing::debug!("tray menu initialized");
    Ok(())
}

/// Rebuilds the menu so it reflects the current state.
pub fn refresh<R: Runtime>(app: &AppHandle<R>) {
    let Some(tray) = app.tray_by_id(TRAY_ID) else {
        return;
    };

    match build_menu(app) {
        Ok(menu) => {
            if let Err(err) = tray.set_menu(Some(menu)) {
                tracing::warn!(error = %err, "failed to update tray menu");
            }
        }
        Err(err) => tracing::warn!(error = %err, "failed to rebuild tray menu"),
    }
}

fn platform_error(err: tauri::Error) -> RecenterError { RecenterError::PlatformError(err.to_string()) }

fn build_menu<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let config = config::get_config();
    let trusted = accessibility::is_trusted();

    let snap = MenuItem::with_id(app, SNAP_ID, "Snap Frontmost Window", trusted, Some(SNAP_SHORTCUT))?;
    let auto_snap =
        CheckMenuItem::with_id(app, AUTO_SNAP_ID, "Auto-snap New Apps", true, config.auto_snap, None::<&str>)?;
    let margins = margin_submenu(app, config.horizontal_margin())?;
    let login_item = CheckMenuItem::with_id(
        app,
        LOGIN_ITEM_ID,
        "Launch at Login",
        true,
        login_item::status().is_enabled(),
        None::<&str>,
    )?;
    let accessibility =
        MenuItem::with_id(app, ACCESSIBILITY_ID, "Grant Accessibility Access…", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, QUIT_ID, format!("Quit {APP_NAME}"), true, None::<&str>)?;
    let separator_1 = PredefinedMenuItem::separator(app)?;
    let separator_2 = PredefinedMenuItem::separator(app)?;

    let mut items: Vec<&dyn IsMenuItem<R>> = Vec::with_capacity(8);
    items.push(&snap);
    items.push(&separator_1);
    items.push(&auto_snap);
    items.push(&margins);
    items.push(&login_item);
    items.push(&separator_2);
    if !trusted {
        items.push(&accessibility);
    }
    items.push(&quit);

    Menu::with_items(app, &items)
}

fn margin_submenu<R: Runtime>(app: &AppHandle<R>, current: f64) -> tauri::Result<Submenu<R>> {
    let mut entries = MARGIN_PRESETS
        .iter()
        .map(|&preset| {
            CheckMenuItem::with_id(
                app,
                format!("{MARGIN_ID_PREFIX}{preset}"),
                format!("{preset} px"),
                true,
                is_current_margin(preset, current),
                None::<&str>,
            )
        })
        .collect::<tauri::Result<Vec<_>>>()?;

    // A value edited by hand in the config file still shows up, checked
    if !MARGIN_PRESETS.iter().any(|&preset| is_current_margin(preset, current)) {
        entries.push(CheckMenuItem::with_id(
            app,
            "margin-custom",
            format!("Custom ({current} px)"),
            false,
            true,
            None::<&str>,
        )?);
    }

    let items: Vec<&dyn IsMenuItem<R>> = entries.iter().map(|item| item as &dyn IsMenuItem<R>).collect();
    Submenu::with_id_and_items(app, MARGIN_MENU_ID, "Horizontal Margin", true, &items)
}

fn is_current_margin(preset: u32, current: f64) -> bool { (f64::from(preset) - current).abs() < 0.5 }

/// Parses `margin-<points>` menu ids.
fn parse_margin_id(id: &str) -> Option<f64> {
    id.strip_prefix(MARGIN_ID_PREFIX)?.parse::<u32>().ok().map(f64::from)
}

fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    let id = event.id.as_ref();
    match id {
        SNAP_ID => service::send(SnapCommand::SnapFrontmost),
        AUTO_SNAP_ID => {
            update_config(|config| config.auto_snap = !config.auto_snap);
            refresh(app);
        }
        LOGIN_ITEM_ID => {
            toggle_login_item();
            refresh(app);
        }
        ACCESSIBILITY_ID => {
            if !accessibility::check_and_prompt() {
                workspace::open_url(accessibility::ACCESSIBILITY_SETTINGS_URL);
            }
            refresh(app);
        }
        QUIT_ID => {
            tracing::info!("quit requested via menu bar");
            app.exit(0);
        }
        _ => {
            if let Some(margin) = parse_margin_id(id) {
                update_config(|config| config.horizontal_snap_margin = margin);
                refresh(app);
            }
        }
    }
}

fn update_config<F: FnOnce(&mut config::RecenterConfig)>(change: F) {
    match config::init().update(change) {
        Ok(config) => tracing::info!(
            auto_snap = config.auto_snap,
            horizontal_snap_margin = config.horizontal_snap_margin,
            "configuration updated"
        ),
        Err(err) => tracing::warn!(error = %err, "failed to save configuration"),
    }
}

fn toggle_login_item() {
    let enable = !login_item::status().is_enabled();
    if let Err(err) = login_item::set_enabled(enable) {
        tracing::warn!(error = %err, "login item change failed");
        alert::show_warning("Launch at Login", &err.to_string());
    }
}
