//! Geometry primitives shared by the eligibility filter and the frame planner.
//!
//! Two coordinate spaces are in play:
//!
//! - **Display space**: origin at the bottom-left of the primary display, Y grows
//!   upward. `NSScreen` frames and visible frames are reported in this space.
//! - **Accessibility space**: origin at the top-left of the primary display, Y grows
//!   downward. `AXPosition` and `AXSize` are read and written in this space.
//!
//! Both spaces share the X axis, so only Y needs to be flipped. The flip axis is the
//! `maxY` of the primary display's full frame.

use serde::Serialize;

// ============================================================================
// Point / Size
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle in either display or accessibility space.
///
/// The struct does not track which space it belongs to; the functions that
/// produce and consume it document the space they expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// X coordinate of the origin.
    pub x: f64,
    /// Y coordinate of the origin (bottom edge in display space, top edge in
    /// accessibility space).
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Point { Point { x: self.x, y: self.y } }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    #[must_use]
    pub const fn min_x(&self) -> f64 { self.x }

    #[must_use]
    pub fn max_x(&self) -> f64 { self.x + self.width }

    #[must_use]
    pub fn mid_x(&self) -> f64 { self.x + self.width / 2.0 }

    #[must_use]
    pub const fn min_y(&self) -> f64 { self.y }

    #[must_use]
    pub fn max_y(&self) -> f64 { self.y + self.height }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Returns whether a point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{x: {}, y: {}, w: {}, h: {}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

// ============================================================================
// Coordinate Conversion
// ============================================================================

/// Converts a display-space rectangle into accessibility space.
///
/// `primary_max_y` is the `maxY` of the primary display's full frame.
#[must_use]
pub fn to_accessibility(rect: Rect, primary_max_y: f64) -> Rect {
    Rect::new(rect.x, primary_max_y - rect.max_y(), rect.width, rect.height)
}

/// Converts an accessibility-space point into display space.
///
/// The conversion is its own inverse for points.
#[must_use]
pub fn to_display_point(point: Point, primary_max_y: f64) -> Point {
    Point::new(point.x, primary_max_y - point.y)
}
