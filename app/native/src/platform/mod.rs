//! macOS bindings.
//!
//! Thin wrappers over AppKit, the Accessibility API and ServiceManagement.
//! [`desktop::MacDesktop`] plugs them into the platform-independent snapper.

pub mod accessibility;
pub mod alert;
pub mod ax;
pub mod desktop;
pub mod login_item;
pub mod objc;
pub mod screen;
pub mod thread;
pub mod workspace;
