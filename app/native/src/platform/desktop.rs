//! [`Desktop`] backed by AppKit and the Accessibility API.
//!
//! Every method here must run on the main thread.

use super::ax::AXElement;
use super::{accessibility, screen, workspace};
use crate::snap::{ApplicationHandle, Desktop, ScreenInfo};

/// The live macOS desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacDesktop;

/// A running application addressed through its accessibility element.
#[derive(Debug, Clone)]
pub struct MacApp {
    pid: i32,
    element: AXElement,
}

impl MacApp {
    fn new(pid: i32) -> Option<Self> {
        if pid <= 0 {
            return None;
        }
        AXElement::application(pid).map(|element| Self { pid, element })
    }
}

impl ApplicationHandle for MacApp {
    type Window = AXElement;

    fn pid(&self) -> i32 { self.pid }

    fn is_terminated(&self) -> bool { workspace::is_terminated(self.pid) }

    fn windows(&self) -> Option<Vec<AXElement>> { self.element.windows() }

    fn focused_window(&self) -> Option<AXElement> { self.element.focused_window() }
}

impl Desktop for MacDesktop {
    type App = MacApp;

    fn is_trusted(&self) -> bool { accessibility::is_trusted() }

    fn application(&self, pid: i32) -> Option<MacApp> { MacApp::new(pid) }

    fn frontmost_application(&self) -> Option<MacApp> {
        workspace::frontmost_pid().and_then(MacApp::new)
    }

    fn screens(&self) -> Vec<ScreenInfo> { screen::all_screens() }
}
