//! Launch-at-login registration through `SMAppService`.
//!
//! Uses the main-app service, so the registered item is the running bundle
//! itself. Outside a signed `.app` bundle the system reports `NotFound` and
//! registration fails with a descriptive error.

use std::ptr;

use objc::runtime::{BOOL, Class, Object, YES};
use objc::{msg_send, sel, sel_impl};

use super::objc::nserror_description;
use crate::error::RecenterError;

/// Registration state reported by `SMAppService.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginItemStatus {
    NotRegistered,
    Enabled,
    RequiresApproval,
    NotFound,
}

impl LoginItemStatus {
    const fn from_raw(raw: isize) -> Self {
        match raw {
            1 => Self::Enabled,
            2 => Self::RequiresApproval,
            3 => Self::NotFound,
            _ => Self::NotRegistered,
        }
    }

    /// Whether the tray should show the login item as switched on.
    #[must_use]
    pub const fn is_enabled(self) -> bool { matches!(self, Self::Enabled | Self::RequiresApproval) }
}

fn main_app_service() -> Result<*mut Object, RecenterError> {
    let Some(class) = Class::get("SMAppService") else {
        return Err(RecenterError::LoginItemError(
            "SMAppService is unavailable on this macOS version".into(),
        ));
    };

    let service: *mut Object = unsafe { msg_send![class, mainAppService] };
    if service.is_null() {
        return Err(RecenterError::LoginItemError("failed to get main app service".into()));
    }
    Ok(service)
}

/// Reads the current login item status.
#[must_use]
pub fn status() -> LoginItemStatus {
    match main_app_service() {
        Ok(service) => {
            let raw: isize = unsafe { msg_send![service, status] };
            LoginItemStatus::from_raw(raw)
        }
        Err(err) => {
            tracing::debug!(error = %err, "login item status unavailable");
            LoginItemStatus::NotRegistered
        }
    }
}

/// Registers or unregisters the app as a login item.
///
/// # Errors
///
/// Returns [`RecenterError::LoginItemError`] carrying the system's description
/// when the change is rejected.
pub fn set_enabled(enabled: bool) -> Result<(), RecenterError> {
    let service = main_app_service()?;
    let mut error: *mut Object = ptr::null_mut();

    let ok: BOOL = unsafe {
        if enabled {
            msg_send![service, registerAndReturnError: &raw mut error]
        } else {
            msg_send![service, unregisterAndReturnError: &raw mut error]
        }
    };

    if ok == YES {
        tracing::info!(enabled, "login item updated");
        return Ok(());
    }

    let description = unsafe { nserror_description(error) };
    let action = if enabled { "enable" } else { "disable" };
    Err(RecenterError::LoginItemError(format!("Failed to {action} launch at login: {description}")))
}
