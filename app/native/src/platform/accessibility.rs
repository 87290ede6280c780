//! Accessibility permission checks.
//!
//! Every window read and write goes through the Accessibility API, which only
//! works once the user has listed Recenter under
//! System Settings > Privacy & Security > Accessibility.

use std::ffi::c_void;

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;
}

// Key for prompting the user for accessibility permissions
const K_AX_TRUSTED_CHECK_OPTION_PROMPT: &str = "AXTrustedCheckOptionPrompt";

/// Settings pane that lists accessibility clients.
pub const ACCESSIBILITY_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.preference.security?Privacy_Accessibility";

/// Checks if the process is trusted for accessibility, without prompting.
#[must_use]
pub fn is_trusted() -> bool { unsafe { AXIsProcessTrusted() } }

/// Checks accessibility trust and asks the system to show its permission
/// dialog when the process is not yet trusted.
///
/// Trust granted afterwards is picked up on the next check; no restart needed.
pub fn check_and_prompt() -> bool {
    let key = CFString::new(K_AX_TRUSTED_CHECK_OPTION_PROMPT);
    let value = CFBoolean::true_value();

    let pairs = [(key.as_CFType(), value.as_CFType())];
    let options = CFDictionary::from_CFType_pairs(&pairs);

    let trusted = unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef().cast()) };
    if !trusted {
        tracing::warn!("accessibility access not granted; window snapping is disabled");
    }
    trusted
}
