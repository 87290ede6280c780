//! Frame planner.
//!
//! Computes the centered, near-maximized destination for a window on a given
//! display, decides whether a move is needed at all, and picks the display a
//! snap should target.

use serde::Serialize;

use super::geometry::{Point, Rect, to_display_point};

/// Neither dimension of a planned frame drops below this.
pub const MIN_TARGET_EXTENT: f64 = 240.0;

/// Half of [`MIN_TARGET_EXTENT`]; the horizontal inset never eats into it.
pub const CENTER_RESERVE: f64 = MIN_TARGET_EXTENT / 2.0;

/// Lower bound of the maximum horizontal inset, for very narrow displays.
pub const MIN_INSET: f64 = 8.0;

/// Fixed gap kept above and below the planned frame.
pub const VERTICAL_MARGIN: f64 = 24.0;

/// Position drift (|dx| + |dy|) below which a window counts as already placed.
pub const POSITION_TOLERANCE: f64 = 8.0;

/// Size drift (|dw| + |dh|) below which a window counts as already placed.
pub const SIZE_TOLERANCE: f64 = 12.0;

// ============================================================================
// ScreenInfo
// ============================================================================

/// A physical display, in display space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    /// `CGDirectDisplayID`, or 0 when unknown.
    pub id: u32,
    /// Full display frame.
    pub frame: Rect,
    /// Drawable area, excluding the menu bar and the Dock.
    pub visible_frame: Rect,
    /// Whether this is the display carrying the global coordinate origin.
    pub is_primary: bool,
}

impl ScreenInfo {
    #[must_use]
    pub const fn new(id: u32, frame: Rect, visible_frame: Rect, is_primary: bool) -> Self {
        Self { id, frame, visible_frame, is_primary }
    }
}

// ============================================================================
// Planning
// ============================================================================

/// Plans the destination frame inside `visible_frame`, in display space.
///
/// The frame is centered horizontally with `horizontal_margin` on each side
/// (clamped so the result keeps at least [`MIN_TARGET_EXTENT`] of width) and
/// spans the visible height minus [`VERTICAL_MARGIN`] at top and bottom.
#[must_use]
pub fn plan_frame(visible_frame: Rect, horizontal_margin: f64) -> Rect {
    let horizontal_margin = horizontal_margin.max(0.0);

    let max_inset = MIN_INSET.max(visible_frame.width / 2.0 - CENTER_RESERVE);
    let inset = max_inset.min(horizontal_margin);
    let width = visible_frame
        .width
        .min(MIN_TARGET_EXTENT.max(visible_frame.width - 2.0 * inset));
    let x = visible_frame.mid_x() - width / 2.0;

    let height = visible_frame
        .height
        .min(MIN_TARGET_EXTENT.max(visible_frame.height - 2.0 * VERTICAL_MARGIN));
    let y = visible_frame.min_y() + VERTICAL_MARGIN;

    Rect::new(x, y, width, height)
}

/// Returns whether a window at `current` must be written to reach `target`.
///
/// Both rectangles must be in the same space.
#[must_use]
pub fn needs_move(current: Rect, target: Rect) -> bool {
    let position_delta = (current.x - target.x).abs() + (current.y - target.y).abs();
    let size_delta =
        (current.width - target.width).abs() + (current.height - target.height).abs();

    !(position_delta < POSITION_TOLERANCE && size_delta < SIZE_TOLERANCE)
}

// ============================================================================
// Screen Selection
// ============================================================================

/// Returns the primary display: the flagged one, otherwise the first.
#[must_use]
pub fn primary_screen(screens: &[ScreenInfo]) -> Option<&ScreenInfo> {
    screens.iter().find(|screen| screen.is_primary).or_else(|| screens.first())
}

/// Picks the display a snap should target.
///
/// `focused_position` is the focused window's top-left corner in accessibility
/// space. The display whose full frame contains it wins; otherwise the primary
/// display is used.
#[must_use]
pub fn select_screen(
    screens: &[ScreenInfo],
    focused_position: Option<Point>,
) -> Option<&ScreenInfo> {
    let primary = primary_screen(screens)?;

    focused_position
        .map(|position| to_display_point(position, primary.frame.max_y()))
        .and_then(|point| screens.iter().find(|screen| screen.frame.contains(point)))
        .or(Some(primary))
}
