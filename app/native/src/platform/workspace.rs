//! `NSWorkspace` integration: launch notifications and running applications.
//!
//! The launch observer is an Objective-C object registered with the shared
//! workspace's notification center. It forwards the pid of every launched
//! application to a Rust callback; everything else happens off that callback.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use objc::declare::ClassDecl;
use objc::runtime::{BOOL, Class, Object, Sel, YES};
use objc::{class, msg_send, sel, sel_impl};

use super::objc::nsstring;
use crate::error::RecenterError;

/// Callback invoked with the pid of each newly launched application.
type AppLaunchCallback = Box<dyn Fn(i32) + Send + Sync>;

/// Global callback for app launches.
static APP_LAUNCH_CALLBACK: OnceLock<AppLaunchCallback> = OnceLock::new();

/// Whether the monitor has been installed.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

const OBSERVER_CLASS_NAME: &str = "RecenterAppLaunchObserver";

// ============================================================================
// Notification Observer
// ============================================================================

/// Creates the Objective-C observer object for workspace notifications.
///
/// # Safety
///
/// Must be called with a live Objective-C runtime. The returned object is
/// intentionally leaked; the notification center keeps pointing at it for the
/// lifetime of the process.
unsafe fn create_workspace_observer() -> Option<*mut Object> {
    let observer_class = match Class::get(OBSERVER_CLASS_NAME) {
        Some(existing) => existing,
        None => {
            let mut decl = ClassDecl::new(OBSERVER_CLASS_NAME, class!(NSObject))?;
            unsafe {
                decl.add_method(
                    sel!(handleAppLaunch:),
                    handle_app_launch_notification as extern "C" fn(&Object, Sel, *mut Object),
                );
            }
            decl.register()
        }
    };

    let instance: *mut Object = msg_send![observer_class, alloc];
    let instance: *mut Object = msg_send![instance, init];
    (!instance.is_null()).then_some(instance)
}

/// Receives `NSWorkspaceDidLaunchApplicationNotification`.
extern "C" fn handle_app_launch_notification(_self: &Object, _cmd: Sel, notification: *mut Object) {
    let Some(pid) = (unsafe { launched_pid(notification) }) else {
        return;
    };

    tracing::debug!(pid, "application launched");
    if let Some(callback) = APP_LAUNCH_CALLBACK.get() {
        callback(pid);
    }
}

/// Extracts the launched application's pid from the notification's `userInfo`.
unsafe fn launched_pid(notification: *mut Object) -> Option<i32> {
    if notification.is_null() {
        return None;
    }

    let user_info: *mut Object = msg_send![notification, userInfo];
    if user_info.is_null() {
        return None;
    }

    let app_key = unsafe { nsstring("NSWorkspaceApplicationKey") };
    let running_app: *mut Object = msg_send![user_info, objectForKey: app_key];
    if running_app.is_null() {
        return None;
    }

    let pid: i32 = msg_send![running_app, processIdentifier];
    (pid > 0).then_some(pid)
}

// ============================================================================
// Public API
// ============================================================================

/// Installs the app launch observer.
///
/// Must be called on the main thread. The observer stays registered for the
/// lifetime of the process.
///
/// # Errors
///
/// Returns [`RecenterError::PlatformError`] when the observer was already
/// installed or any of the AppKit objects cannot be obtained.
pub fn watch_launches<F>(callback: F) -> Result<(), RecenterError>
where F: Fn(i32) + Send + Sync + 'static {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(RecenterError::PlatformError("launch observer already installed".into()));
    }

    if APP_LAUNCH_CALLBACK.set(Box::new(callback)).is_err() {
        return Err(RecenterError::PlatformError("launch callback already set".into()));
    }

    let result = unsafe { register_observer() };
    if result.is_err() {
        INITIALIZED.store(false, Ordering::SeqCst);
    }
    result
}

unsafe fn register_observer() -> Result<(), RecenterError> {
    let workspace: *mut Object = msg_send![class!(NSWorkspace), sharedWorkspace];
    if workspace.is_null() {
        return Err(RecenterError::PlatformError("failed to get shared workspace".into()));
    }

    let notification_center: *mut Object = msg_send![workspace, notificationCenter];
    if notification_center.is_null() {
        return Err(RecenterError::PlatformError(
            "failed to get workspace notification center".into(),
        ));
    }

    let Some(observer) = (unsafe { create_workspace_observer() }) else {
        return Err(RecenterError::PlatformError("failed to create app launch observer".into()));
    };

    let notification_name = unsafe { nsstring("NSWorkspaceDidLaunchApplicationNotification") };
    let _: () = msg_send![
        notification_center,
        addObserver: observer
        selector: sel!(handleAppLaunch:)
        name: notification_name
        object: std::ptr::null::<Object>()
    ];

    tracing::debug!("app launch observer installed");
    Ok(())
}

/// Returns the pid of the frontmost application, if any.
#[must_use]
pub fn frontmost_pid() -> Option<i32> {
    unsafe {
        let workspace: *mut Object = msg_send![class!(NSWorkspace), sharedWorkspace];
        if workspace.is_null() {
            return None;
        }

        let app: *mut Object = msg_send![workspace, frontmostApplication];
        if app.is_null() {
            return None;
        }

        let pid: i32 = msg_send![app, processIdentifier];
        (pid > 0).then_some(pid)
    }
}

/// Returns `true` when no running application with `pid` exists anymore, or it
/// has been flagged as terminated.
#[must_use]
pub fn is_terminated(pid: i32) -> bool {
    if pid <= 0 {
        return true;
    }

    unsafe {
        let app: *mut Object = msg_send![
            class!(NSRunningApplication),
            runningApplicationWithProcessIdentifier: pid
        ];
        if app.is_null() {
            return true;
        }

        let terminated: BOOL = msg_send![app, isTerminated];
        terminated == YES
    }
}

/// Opens a URL with the default handler.
pub fn open_url(url: &str) {
    unsafe {
        let url_string = nsstring(url);
        let ns_url: *mut Object = msg_send![class!(NSURL), URLWithString: url_string];
        if ns_url.is_null() {
            tracing::warn!(url, "invalid URL");
            return;
        }

        let workspace: *mut Object = msg_send![class!(NSWorkspace), sharedWorkspace];
        let opened: BOOL = msg_send![workspace, openURL: ns_url];
        if opened != YES {
            tracing::warn!(url, "failed to open URL");
        }
    }
}
