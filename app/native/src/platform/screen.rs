//! Display enumeration through `NSScreen`.
//!
//! Frames are reported in display space (bottom-left origin, y up), exactly as
//! AppKit hands them out. Conversion to accessibility space happens in the
//! snapper.

use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};

use super::objc::{NSRect, nsstring};
use crate::snap::ScreenInfo;

/// Gets all connected screens.
///
/// The first entry is the primary display (the one holding the menu bar);
/// AppKit guarantees that order for `+[NSScreen screens]`.
#[must_use]
pub fn all_screens() -> Vec<ScreenInfo> { unsafe { all_screens_unsafe() } }

unsafe fn all_screens_unsafe() -> Vec<ScreenInfo> {
    let Some(screen_class) = Class::get("NSScreen") else {
        tracing::error!("failed to get NSScreen class");
        return Vec::new();
    };

    let ns_screens: *mut Object = msg_send![screen_class, screens];
    if ns_screens.is_null() {
        return Vec::new();
    }

    let count: usize = msg_send![ns_screens, count];
    let mut screens = Vec::with_capacity(count);

    for i in 0..count {
        let ns_screen: *mut Object = msg_send![ns_screens, objectAtIndex: i];
        if ns_screen.is_null() {
            continue;
        }
        screens.push(unsafe { screen_from_nsscreen(ns_screen, i == 0) });
    }

    screens
}

/// Converts an `NSScreen` object to a [`ScreenInfo`].
///
/// # Safety
///
/// `ns_screen` must be a valid pointer to an `NSScreen` object.
unsafe fn screen_from_nsscreen(ns_screen: *mut Object, is_primary: bool) -> ScreenInfo {
    let frame: NSRect = msg_send![ns_screen, frame];
    let visible_frame: NSRect = msg_send![ns_screen, visibleFrame];
    let device_desc: *mut Object = msg_send![ns_screen, deviceDescription];
    let id = unsafe { display_id(device_desc) };

    ScreenInfo::new(id, frame.into(), visible_frame.into(), is_primary)
}

/// Reads the `CGDirectDisplayID` stored under `NSScreenNumber`.
///
/// # Safety
///
/// `device_desc` must be null or a valid `NSDictionary` pointer.
unsafe fn display_id(device_desc: *mut Object) -> u32 {
    if device_desc.is_null() {
        return 0;
    }

    let key = unsafe { nsstring("NSScreenNumber") };
    let id_obj: *mut Object = msg_send![device_desc, objectForKey: key];
    if id_obj.is_null() {
        return 0;
    }

    msg_send![id_obj, unsignedIntValue]
}
