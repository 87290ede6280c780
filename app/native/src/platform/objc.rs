//! Objective-C helpers shared by the AppKit bindings.

use std::ffi::c_void;

use objc::runtime::Object;
use objc::{class, msg_send, sel, sel_impl};

/// Objective-C `NSRect` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NSRect {
    pub origin: NSPoint,
    pub size: NSSize,
}

/// Objective-C `NSPoint` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NSPoint {
    pub x: f64,
    pub y: f64,
}

/// Objective-C `NSSize` structure.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NSSize {
    pub width: f64,
    pub height: f64,
}

impl From<NSRect> for crate::snap::Rect {
    fn from(rect: NSRect) -> Self {
        Self::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}

/// Creates an autoreleased `NSString` from a Rust string slice.
///
/// # Safety
///
/// The Objective-C runtime must be initialized.
#[must_use]
pub unsafe fn nsstring(s: &str) -> *mut Object {
    let bytes = s.as_ptr().cast::<c_void>();
    let len = s.len();
    let encoding: usize = 4; // NSUTF8StringEncoding

    msg_send![
        class!(NSString),
        stringWithBytes: bytes
        length: len
        encoding: encoding
    ]
}

/// Converts an `NSString` to a Rust `String`.
///
/// Returns an empty string if the input is null or has no UTF-8 form.
///
/// # Safety
///
/// `nsstring` must be either null or a valid `NSString` pointer.
#[must_use]
pub unsafe fn nsstring_to_string(nsstring: *mut Object) -> String {
    if nsstring.is_null() {
        return String::new();
    }

    let c_str: *const i8 = msg_send![nsstring, UTF8String];
    if c_str.is_null() {
        return String::new();
    }

    // SAFETY: c_str is verified non-null above, and UTF8String returns a valid C string
    unsafe { std::ffi::CStr::from_ptr(c_str) }.to_string_lossy().into_owned()
}

/// Reads `localizedDescription` from an `NSError`.
///
/// # Safety
///
/// `error` must be either null or a valid `NSError` pointer.
#[must_use]
pub unsafe fn nserror_description(error: *mut Object) -> String {
    if error.is_null() {
        return "unknown error".to_string();
    }

    let description: *mut Object = msg_send![error, localizedDescription];
    let text = unsafe { nsstring_to_string(description) };
    if text.is_empty() { "unknown error".to_string() } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nsstring_round_trip() {
        let original = "Recenter ⌃⌥⌘C";
        let converted = unsafe { nsstring_to_string(nsstring(original)) };
        assert_eq!(converted, original);
    }

    #[test]
    fn test_nsstring_to_string_null() {
        assert_eq!(unsafe { nsstring_to_string(std::ptr::null_mut()) }, "");
    }

    #[test]
    fn test_nserror_description_null() {
        assert_eq!(unsafe { nserror_description(std::ptr::null_mut()) }, "unknown error");
    }

    #[test]
    fn test_nsrect_into_rect() {
        let rect: crate::snap::Rect = NSRect {
            origin: NSPoint { x: 10.0, y: 20.0 },
            size: NSSize { width: 300.0, height: 200.0 },
        }
        .into();
        assert_eq!(rect, crate::snap::Rect::new(10.0, 20.0, 300.0, 200.0));
    }
}
