//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Recenter Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.
//
// Changes are picked up automatically while Recenter is running.
// Changing a setting from the menu bar rewrites this file without comments.

{
  // Gap kept on the left and right of a snapped window, in points.
  // Negative values are treated as 0. On narrow displays the gap shrinks so a
  // snapped window is never narrower than 240 points.
  // "horizontalSnapMargin": 80,

  // Snap the window of every newly launched application.
  // When false, only the keyboard shortcut (Control+Option+Command+C) and the
  // menu bar item snap the frontmost window.
  // "autoSnap": true
}
"#
    .to_string()
}

/// Writes the template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
