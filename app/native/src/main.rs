#![allow(clippy::multiple_crate_versions)]

//! Recenter - keeps application windows centered on their display.
//!
//! This binary serves as both the desktop application and CLI:
//! - When called with no arguments or with `--desktop`: launches the menu bar app
//! - When called with subcommands (e.g., `recenter plan`): runs CLI commands

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Run as desktop app if:
    // - No arguments (just the binary name)
    // - First arg is --desktop
    // - Running from within an .app bundle (detected by bundle path)
    let run_desktop = args.len() == 1
        || args.get(1).is_some_and(|arg| arg == "--desktop")
        || is_running_from_app_bundle();

    let result = if run_desktop {
        recenter_lib::logging::init(false);
        recenter_lib::run()
    } else {
        recenter_lib::cli::run()
    };

    if let Err(err) = result {
        eprintln!("recenter: {err}");
        std::process::exit(1);
    }
}

/// Checks if the binary is running from within a macOS .app bundle.
///
/// When launched from Recenter.app, the executable path will be something like:
/// `/Applications/Recenter.app/Contents/MacOS/recenter`
fn is_running_from_app_bundle() -> bool {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.to_str().map(|s| s.contains(".app/Contents/MacOS")))
        .unwrap_or(false)
}
