//! Application-wide constants.

/// Bundle identifier, shared with `tauri.conf.json`.
pub const APP_BUNDLE_ID: &str = "com.marcosmoura.recenter";

/// Display name used in menus and alerts.
pub const APP_NAME: &str = "Recenter";

/// Global shortcut that snaps the frontmost application.
pub const SNAP_SHORTCUT: &str = "Control+Option+Command+C";

/// How [`SNAP_SHORTCUT`] is shown in the menu.
pub const SNAP_SHORTCUT_LABEL: &str = "⌃⌥⌘C";

/// Id of the tray icon declared in `tauri.conf.json`.
pub const TRAY_ID: &str = "recenter";

#[cfg(test)]
mod tests {
    use super::*;

    const TAURI_CONF: &str = include_str!("../tauri.conf.json");

    #[test]
    fn test_bundle_id_matches_tauri_conf() {
        assert!(TAURI_CONF.contains(&format!("\"identifier\": \"{APP_BUNDLE_ID}\"")));
    }

    #[test]
    fn test_tray_id_matches_tauri_conf() {
        assert!(TAURI_CONF.contains(&format!("\"id\": \"{TRAY_ID}\"")));
    }

    #[test]
    fn test_product_name_matches_app_name() {
        assert!(TAURI_CONF.contains(&format!("\"productName\": \"{APP_NAME}\"")));
    }
}
