//! Modal `NSAlert` for errors the user needs to see.

use objc::runtime::{Object, YES};
use objc::{class, msg_send, sel, sel_impl};

use super::objc::nsstring;

/// `NSAlertStyleWarning`.
const ALERT_STYLE_WARNING: usize = 0;

/// Shows a blocking warning alert. Must be called on the main thread.
pub fn show_warning(title: &str, message: &str) {
    unsafe {
        let alert: *mut Object = msg_send![class!(NSAlert), alloc];
        let alert: *mut Object = msg_send![alert, init];
        if alert.is_null() {
            tracing::error!(title, message, "failed to create alert");
            return;
        }

        let _: () = msg_send![alert, setAlertStyle: ALERT_STYLE_WARNING];
        let _: () = msg_send![alert, setMessageText: nsstring(title)];
        let _: () = msg_send![alert, setInformativeText: nsstring(message)];

        let app: *mut Object = msg_send![class!(NSApplication), sharedApplication];
        let _: () = msg_send![app, activateIgnoringOtherApps: YES];
        let _: isize = msg_send![alert, runModal];
        let _: () = msg_send![alert, release];
    }
}
