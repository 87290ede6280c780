//! Window eligibility filter.
//!
//! Picks the single window of an application that the snapper acts on. Windows
//! are checked in the order the system reports them and the first one passing
//! every check wins; there is no ranking beyond that.

use super::error::SnapResult;
use super::geometry::{Point, Rect, Size};

/// Role shared by every top-level window.
pub const STANDARD_WINDOW_ROLE: &str = "AXWindow";

/// Subrole of regular document/app windows (as opposed to dialogs, sheets,
/// floating panels, and system dialogs).
pub const STANDARD_WINDOW_SUBROLE: &str = "AXStandardWindow";

/// Windows smaller than this (in square points) are palettes, HUDs, or small
/// utility panels and are never snapped.
pub const MIN_WINDOW_AREA: f64 = 20_000.0;

// ============================================================================
// WindowHandle
// ============================================================================

/// Typed view over an OS window.
///
/// Getters return `None` when the attribute is missing or cannot be read. Geometry
/// is in accessibility space (top-left origin).
pub trait WindowHandle {
    fn role(&self) -> Option<String>;

    fn subrole(&self) -> Option<String>;

    fn is_minimized(&self) -> Option<bool>;

    fn is_fullscreen(&self) -> Option<bool>;

    fn position(&self) -> Option<Point>;

    fn size(&self) -> Option<Size>;

    /// Moves the window's top-left corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS rejects the write.
    fn set_position(&self, position: Point) -> SnapResult<()>;

    /// Resizes the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS rejects the write.
    fn set_size(&self, size: Size) -> SnapResult<()>;

    /// Minimizes or restores the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS rejects the write.
    fn set_minimized(&self, minimized: bool) -> SnapResult<()>;

    /// Current frame in accessibility space.
    fn frame(&self) -> Option<Rect> {
        Some(Rect::from_origin_size(self.position()?, self.size()?))
    }
}

// ============================================================================
// Eligibility
// ============================================================================

/// Why a window was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Role is missing or not `AXWindow`.
    Role,
    /// Subrole is present and not `AXStandardWindow`.
    Subrole,
    /// Minimized while minimized windows are not allowed.
    Minimized,
    /// Window is in native fullscreen.
    Fullscreen,
    /// Size unknown or area below [`MIN_WINDOW_AREA`].
    TooSmall,
}

/// Runs the eligibility checks in order and reports the first one that fails.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first failing check.
pub fn check_eligibility<W: WindowHandle + ?Sized>(
    window: &W,
    allow_minimized: bool,
) -> Result<(), Rejection> {
    if window.role().as_deref() != Some(STANDARD_WINDOW_ROLE) {
        return Err(Rejection::Role);
    }

    if let Some(subrole) = window.subrole()
        && subrole != STANDARD_WINDOW_SUBROLE
    {
        return Err(Rejection::Subrole);
    }

    if !allow_minimized && window.is_minimized().unwrap_or(false) {
        return Err(Rejection::Minimized);
    }

    if window.is_fullscreen().unwrap_or(false) {
        return Err(Rejection::Fullscreen);
    }

    match window.size() {
        Some(size) if size.area() >= MIN_WINDOW_AREA => Ok(()),
        _ => Err(Rejection::TooSmall),
    }
}

/// Returns whether the window is a snap target.
#[must_use]
pub fn is_eligible<W: WindowHandle + ?Sized>(window: &W, allow_minimized: bool) -> bool {
    check_eligibility(window, allow_minimized).is_ok()
}

/// Returns the first eligible window, in the order given.
pub fn select_target<W, I>(windows: I, allow_minimized: bool) -> Option<W>
where
    W: WindowHandle,
    I: IntoIterator<Item = W>,
{
    windows.into_iter().find(|window| match check_eligibility(window, allow_minimized) {
        Ok(()) => true,
        Err(rejection) => {
            tracing::trace!(?rejection, "skipping window");
            false
        }
    })
}
