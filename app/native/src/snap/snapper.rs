//! The snap operation.
//!
//! [`Snapper`] is the context object tying the eligibility filter and the frame
//! planner to a concrete [`Desktop`]. Every call is a stateless computation over
//! the geometry the desktop reports at that moment, so repeating a snap is
//! harmless: a window that is already in place is left alone.
//!
//! Nothing here reports failure to the caller. A missing permission, a dead
//! process, a window list that cannot be read, or a rejected write all end in a
//! [`SnapOutcome::Skipped`] carrying the reason for logging.

use super::eligibility::{WindowHandle, select_target};
use super::error::SnapResult;
use super::geometry::{Rect, to_accessibility};
use super::planner::{ScreenInfo, needs_move, plan_frame, primary_screen, select_screen};

// ============================================================================
// Capability Traits
// ============================================================================

/// A running application as seen through the Accessibility API.
pub trait ApplicationHandle {
    type Window: WindowHandle;

    fn pid(&self) -> i32;

    /// Whether the process has exited since the handle was obtained.
    fn is_terminated(&self) -> bool;

    /// Top-level windows in the order the OS reports them, or `None` when the
    /// list cannot be read.
    fn windows(&self) -> Option<Vec<Self::Window>>;

    fn focused_window(&self) -> Option<Self::Window>;
}

/// The system the snapper acts on.
pub trait Desktop {
    type App: ApplicationHandle;

    /// Whether this process may read and write other apps' windows.
    fn is_trusted(&self) -> bool;

    fn application(&self, pid: i32) -> Option<Self::App>;

    fn frontmost_application(&self) -> Option<Self::App>;

    /// Connected displays in display space.
    fn screens(&self) -> Vec<ScreenInfo>;
}

// ============================================================================
// Modes and Outcomes
// ============================================================================

/// What triggered a snap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapMode {
    /// One of the delayed attempts after an app launch.
    Launch,
    /// The global hotkey or the menu item.
    Manual,
    /// Follow-up after a manual snap restored a minimized window.
    Settle,
}

impl SnapMode {
    /// Whether minimized windows may be selected.
    #[must_use]
    pub const fn allows_minimized(self) -> bool { matches!(self, Self::Manual | Self::Settle) }

    /// Whether a minimized target may be restored.
    #[must_use]
    pub const fn may_unminimize(self) -> bool { matches!(self, Self::Manual) }
}

/// Why a snap attempt did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Accessibility access has not been granted.
    NotTrusted,
    /// No frontmost app, or the process is gone.
    AppUnavailable,
    /// The frontmost app is this process.
    OwnProcess,
    /// The window list was unreadable or nothing passed the filter.
    NoEligibleWindow,
    /// A restored window is still minimized after the settle delay.
    StillMinimized,
    /// No display is connected.
    NoScreen,
    /// The OS rejected a window write.
    WriteFailed,
}

/// Result of a single snap attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapOutcome {
    /// The window was written to `frame` (accessibility space).
    Moved { pid: i32, frame: Rect },
    /// The window already sits within tolerance of the planned frame.
    AlreadyPlaced { pid: i32 },
    /// A minimized window was restored; a settle attempt should follow.
    Unminimized { pid: i32 },
    Skipped(SkipReason),
}

impl SnapOutcome {
    /// The pid a settle attempt should target, if one is needed.
    #[must_use]
    pub const fn settle_pid(&self) -> Option<i32> {
        match self {
            Self::Unminimized { pid } => Some(*pid),
            _ => None,
        }
    }
}

// ============================================================================
// Snapper
// ============================================================================

/// Snaps application windows on a [`Desktop`].
#[derive(Debug)]
pub struct Snapper<D> {
    desktop: D,
    own_pid: i32,
}

impl<D: Desktop> Snapper<D> {
    /// Creates a snapper. `own_pid` is skipped by [`Self::snap_frontmost`].
    #[must_use]
    pub const fn new(desktop: D, own_pid: i32) -> Self { Self { desktop, own_pid } }

    #[must_use]
    pub const fn desktop(&self) -> &D { &self.desktop }

    /// Snaps the frontmost application's window, skipping this process.
    pub fn snap_frontmost(&self, horizontal_margin: f64) -> SnapOutcome {
        if !self.desktop.is_trusted() {
            return skipped(SkipReason::NotTrusted, None);
        }

        let Some(app) = self.desktop.frontmost_application() else {
            return skipped(SkipReason::AppUnavailable, None);
        };

        if app.pid() == self.own_pid {
            return skipped(SkipReason::OwnProcess, Some(app.pid()));
        }

        self.snap(&app, SnapMode::Manual, horizontal_margin)
    }

    /// Snaps a window of the application with the given pid.
    pub fn snap_application(&self, pid: i32, mode: SnapMode, horizontal_margin: f64) -> SnapOutcome {
        if !self.desktop.is_trusted() {
            return skipped(SkipReason::NotTrusted, Some(pid));
        }

        let Some(app) = self.desktop.application(pid) else {
            return skipped(SkipReason::AppUnavailable, Some(pid));
        };

        self.snap(&app, mode, horizontal_margin)
    }

    fn snap(&self, app: &D::App, mode: SnapMode, horizontal_margin: f64) -> SnapOutcome {
        let pid = app.pid();
        if pid <= 0 || app.is_terminated() {
            return skipped(SkipReason::AppUnavailable, Some(pid));
        }

        let Some(window) = app
            .windows()
            .and_then(|windows| select_target(windows, mode.allows_minimized()))
        else {
            return skipped(SkipReason::NoEligibleWindow, Some(pid));
        };

        if window.is_minimized().unwrap_or(false) {
            if !mode.may_unminimize() {
                return skipped(SkipReason::StillMinimized, Some(pid));
            }

            return match window.set_minimized(false) {
                Ok(()) => {
                    tracing::debug!(pid, "restored minimized window, waiting to settle");
                    SnapOutcome::Unminimized { pid }
                }
                Err(err) => {
                    tracing::warn!(pid, error = %err, "failed to restore minimized window");
                    skipped(SkipReason::WriteFailed, Some(pid))
                }
            };
        }

        let screens = self.desktop.screens();
        let Some(primary_max_y) = primary_screen(&screens).map(|screen| screen.frame.max_y())
        else {
            return skipped(SkipReason::NoScreen, Some(pid));
        };

        let focused_position = app.focused_window().and_then(|focused| focused.position());
        let Some(screen) = select_screen(&screens, focused_position) else {
            return skipped(SkipReason::NoScreen, Some(pid));
        };

        let planned = plan_frame(screen.visible_frame, horizontal_margin);
        let target = to_accessibility(planned, primary_max_y);

        if let Some(current) = window.frame()
            && !needs_move(current, target)
        {
            tracing::debug!(pid, frame = %current, "window already in place");
            return SnapOutcome::AlreadyPlaced { pid };
        }

        match apply_frame(&window, target) {
            Ok(()) => {
                tracing::info!(pid, ?mode, screen = screen.id, frame = %target, "snapped window");
                SnapOutcome::Moved { pid, frame: target }
            }
            Err(err) => {
                tracing::warn!(pid, error = %err, "failed to snap window");
                skipped(SkipReason::WriteFailed, Some(pid))
            }
        }
    }
}

/// Writes `frame` (accessibility space) to the window.
///
/// Size goes first so the window can shrink before it moves, then position, then
/// size again for apps that clamp the first resize against their old origin. The
/// write counts as applied when the position and at least one size write land.
fn apply_frame<W: WindowHandle>(window: &W, frame: Rect) -> SnapResult<()> {
    let size_1 = window.set_size(frame.size());
    window.set_position(frame.origin())?;
    let size_2 = window.set_size(frame.size());

    size_1.or(size_2)
}

fn skipped(reason: SkipReason, pid: Option<i32>) -> SnapOutcome {
    tracing::debug!(?reason, ?pid, "snap skipped");
    SnapOutcome::Skipped(reason)
}
