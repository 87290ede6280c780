//! Error types for window-control calls.
//!
//! Snapping never surfaces these to the user. They exist so the accessibility
//! wrapper can report *why* a write failed, which is logged before the snap
//! attempt degrades to doing nothing.

use thiserror::Error;

/// Result type alias for window-control operations.
pub type SnapResult<T> = Result<T, SnapError>;

/// Errors returned by [`WindowHandle`](super::WindowHandle) mutators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapError {
    /// The macOS Accessibility API returned an error code.
    ///
    /// Common codes:
    /// - -25202: Invalid UI element (window closed, app terminated)
    /// - -25204: Cannot complete (app busy or unresponsive)
    /// - -25205: Attribute unsupported
    #[error("accessibility error {code}: {message}")]
    Accessibility {
        /// The AX error code returned by the API.
        code: i32,
        /// A human-readable description of the error.
        message: String,
    },

    /// A window write (move, resize, un-minimize) failed.
    #[error("window operation failed: {0}")]
    WindowOperation(String),

    /// A null pointer was returned from an FFI call.
    #[error("null pointer returned from {0}")]
    NullPointer(String),
}

impl SnapError {
    /// Creates an accessibility error with the given code and message.
    #[must_use]
    pub fn accessibility(code: i32, message: impl Into<String>) -> Self {
        Self::Accessibility { code, message: message.into() }
    }

    /// Creates a window operation error with the given message.
    #[must_use]
    pub fn window_op(message: impl Into<String>) -> Self { Self::WindowOperation(message.into()) }

    /// Creates a null pointer error for the given FFI function.
    #[must_use]
    pub fn null_pointer(function: impl Into<String>) -> Self { Self::NullPointer(function.into()) }

    /// Returns the AX error code, if this error came from the Accessibility API.
    #[must_use]
    pub const fn ax_code(&self) -> Option<i32> {
        match self {
            Self::Accessibility { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_error_display() {
        let err = SnapError::accessibility(-25202, "set position: Invalid UI element");
        let msg = err.to_string();
        assert!(msg.contains("-25202"));
        assert!(msg.contains("Invalid UI element"));
        assert_eq!(err.ax_code(), Some(-25202));
    }

    #[test]
    fn test_window_op_display() {
        let err = SnapError::window_op("Failed to set window frame");
        assert_eq!(err.to_string(), "window operation failed: Failed to set window frame");
        assert_eq!(err.ax_code(), None);
    }

    #[test]
    fn test_null_pointer_display() {
        let err = SnapError::null_pointer("AXValueCreate");
        assert!(err.to_string().contains("AXValueCreate"));
    }
}
