//! Snap service: the command channel, its queue driver, and main-thread execution.
//!
//! Producers (launch observer, hotkey, tray) send [`SnapCommand`]s; the driver
//! turns them into timed [`SnapTask`]s and each due task is executed on the main
//! thread against the live desktop.

use std::sync::OnceLock;

use tokio::sync::mpsc;

use crate::config;
use crate::platform::desktop::MacDesktop;
use crate::platform::thread::{dispatch_on_main, is_main_thread};
use crate::snap::{SnapCommand, SnapOutcome, SnapTarget, SnapTask, Snapper, drive};

static SENDER: OnceLock<mpsc::UnboundedSender<SnapCommand>> = OnceLock::new();

/// Starts the queue driver on the Tauri async runtime.
///
/// Later calls are no-ops.
pub fn start() {
    if SENDER.get().is_some() {
        return;
    }

    let (tx, rx) = mpsc::unbounded_channel();
    if SENDER.set(tx).is_err() {
        return;
    }

    tauri::async_runtime::spawn(drive(rx, |task| {
        dispatch_on_main(move || {
            if let Some(pid) = execute(task).settle_pid() {
                send(SnapCommand::Settle { pid });
            }
        });
    }));

    tracing::debug!("snap service started");
}

/// Queues a command for the driver.
///
/// Launches are dropped while auto-snap is disabled.
pub fn send(command: SnapCommand) {
    if !command.is_accepted(config::get_config().auto_snap) {
        tracing::debug!(?command, "auto-snap disabled; ignoring command");
        return;
    }

    let Some(tx) = SENDER.get() else {
        tracing::warn!(?command, "snap service not started");
        return;
    };

    if tx.send(command).is_err() {
        tracing::warn!("snap service stopped; dropping command");
    }
}

/// Called from the launch observer for every new process.
pub fn on_app_launched(pid: i32) { send(SnapCommand::AppLaunched { pid }); }

fn own_pid() -> i32 { i32::try_from(std::process::id()).unwrap_or(-1) }

/// Runs one task against the live desktop. Main thread only.
fn execute(task: SnapTask) -> SnapOutcome {
    debug_assert!(is_main_thread(), "snap tasks must run on the main thread");

    let margin = config::get_config().horizontal_margin();
    let snapper = Snapper::new(MacDesktop, own_pid());

    let outcome = match task.target {
        SnapTarget::Application(pid) => snapper.snap_application(pid, task.mode, margin),
        SnapTarget::Frontmost => snapper.snap_frontmost(margin),
    };

    tracing::debug!(
        snap_target = ?task.target,
        mode = ?task.mode,
        attempt = task.attempt,
        ?outcome,
        "snap task finished"
    );
    outcome
}
