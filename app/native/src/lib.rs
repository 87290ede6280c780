//! Recenter - keeps application windows centered on their display.
//!
//! A macOS menu bar agent that moves the main window of newly launched
//! applications (and, on demand, the frontmost window) into a centered,
//! near-maximized frame. The snapping core, configuration, and CLI are
//! platform independent; the desktop app and its AppKit bindings are macOS only.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod snap;

mod utils;

#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
pub mod platform;

use error::RecenterError;

/// Runs the desktop application.
///
/// This initializes all components and starts the GUI event loop.
///
/// # Errors
///
/// Returns an error if the event loop fails to start, or
/// [`RecenterError::Unsupported`] outside macOS.
pub fn run() -> Result<(), RecenterError> {
    #[cfg(target_os = "macos")]
    {
        app::run()
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(RecenterError::Unsupported)
    }
}
