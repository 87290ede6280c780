//! Window snapping core.
//!
//! Picks an application's target window and moves it into a centered,
//! near-maximized frame on the display it lives on. Everything in this module is
//! platform independent; the macOS bindings implement [`Desktop`],
//! [`ApplicationHandle`] and [`WindowHandle`] on top of the Accessibility API.
//!
//! # Modules
//!
//! - [`geometry`] - Points, sizes, rectangles and coordinate-space conversion
//! - [`eligibility`] - Which window of an app gets snapped
//! - [`planner`] - Where the window goes and whether it needs to move
//! - [`snapper`] - The snap operation over a [`Desktop`]
//! - [`queue`] - Delayed retry scheduling for newly launched apps

pub mod eligibility;
pub mod error;
pub mod geometry;
pub mod planner;
pub mod queue;
pub mod snapper;

#[cfg(test)]
pub(crate) mod testing;

pub use eligibility::{
    MIN_WINDOW_AREA, Rejection, STANDARD_WINDOW_ROLE, STANDARD_WINDOW_SUBROLE, WindowHandle,
    check_eligibility, is_eligible, select_target,
};
pub use error::{SnapError, SnapResult};
pub use geometry::{Point, Rect, Size, to_accessibility, to_display_point};
pub use planner::{
    MIN_TARGET_EXTENT, ScreenInfo, VERTICAL_MARGIN, needs_move, plan_frame, primary_screen,
    select_screen,
};
pub use queue::{
    LAUNCH_RETRY_DELAYS, SnapCommand, SnapQueue, SnapTarget, SnapTask, UNMINIMIZE_SETTLE_DELAY,
    drive,
};
pub use snapper::{ApplicationHandle, Desktop, SkipReason, SnapMode, SnapOutcome, Snapper};
