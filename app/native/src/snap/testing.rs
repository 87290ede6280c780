//! In-memory window and desktop doubles for snap tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::eligibility::{STANDARD_WINDOW_ROLE, STANDARD_WINDOW_SUBROLE, WindowHandle};
use super::error::{SnapError, SnapResult};
use super::geometry::{Point, Size};
use super::planner::ScreenInfo;
use super::snapper::{ApplicationHandle, Desktop};

/// A recorded write against a [`FakeWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Write {
    Position(Point),
    Size(Size),
    Minimized(bool),
}

#[derive(Debug)]
struct WindowState {
    role: Option<String>,
    subrole: Option<String>,
    minimized: Option<bool>,
    fullscreen: Option<bool>,
    position: Option<Point>,
    size: Option<Size>,
    writes: Vec<Write>,
    reject_writes: bool,
    reject_position: bool,
    /// 1-based numbers of the size writes that fail.
    rejected_size_writes: Vec<usize>,
    size_writes: usize,
    sticky_minimized: bool,
}

/// A window whose clones share state, so tests can inspect writes after handing
/// a copy to the code under test.
#[derive(Debug, Clone)]
pub struct FakeWindow(Rc<RefCell<WindowState>>);

impl FakeWindow {
    pub fn standard(position: Point, size: Size) -> Self {
        Self(Rc::new(RefCell::new(WindowState {
            role: Some(STANDARD_WINDOW_ROLE.to_string()),
            subrole: Some(STANDARD_WINDOW_SUBROLE.to_string()),
            minimized: Some(false),
            fullscreen: Some(false),
            position: Some(position),
            size: Some(size),
            writes: Vec::new(),
            reject_writes: false,
            reject_position: false,
            rejected_size_writes: Vec::new(),
            size_writes: 0,
            sticky_minimized: false,
        })))
    }

    pub fn with_role(self, role: Option<&str>) -> Self {
        self.0.borrow_mut().role = role.map(str::to_string);
        self
    }

    pub fn with_subrole(self, subrole: Option<&str>) -> Self {
        self.0.borrow_mut().subrole = subrole.map(str::to_string);
        self
    }

    pub fn with_minimized(self, minimized: Option<bool>) -> Self {
        self.0.borrow_mut().minimized = minimized;
        self
    }

    pub fn with_fullscreen(self, fullscreen: Option<bool>) -> Self {
        self.0.borrow_mut().fullscreen = fullscreen;
        self
    }

    pub fn with_position(self, position: Option<Point>) -> Self {
        self.0.borrow_mut().position = position;
        self
    }

    pub fn with_size(self, size: Option<Size>) -> Self {
        self.0.borrow_mut().size = size;
        self
    }

    /// Every write fails with an AX error.
    pub fn rejecting_writes(self) -> Self {
        self.0.borrow_mut().reject_writes = true;
        self
    }

    /// Position writes fail with an AX error.
    pub fn rejecting_position(self) -> Self {
        self.0.borrow_mut().reject_position = true;
        self
    }

    /// The `nth` size write (1-based) fails with an AX error.
    pub fn rejecting_size_write(self, nth: usize) -> Self {
        self.0.borrow_mut().rejected_size_writes.push(nth);
        self
    }

    /// Un-minimize writes succeed but the window stays minimized.
    pub fn sticky_minimized(self) -> Self {
        self.0.borrow_mut().sticky_minimized = true;
        self
    }

    pub fn writes(&self) -> Vec<Write> { self.0.borrow().writes.clone() }

    pub fn clear_writes(&self) { self.0.borrow_mut().writes.clear(); }

    fn record(&self, write: Write) -> SnapResult<()> {
        let mut state = self.0.borrow_mut();
        let rejected = match write {
            Write::Position(_) => state.reject_position,
            Write::Size(_) => {
                state.size_writes += 1;
                state.rejected_size_writes.contains(&state.size_writes)
            }
            Write::Minimized(_) => false,
        };
        if state.reject_writes || rejected {
            return Err(SnapError::accessibility(-25204, "Cannot complete operation"));
        }

        state.writes.push(write);
        match write {
            Write::Position(position) => state.position = Some(position),
            Write::Size(size) => state.size = Some(size),
            Write::Minimized(minimized) => {
                if !state.sticky_minimized {
                    state.minimized = Some(minimized);
                }
            }
        }
        Ok(())
    }
}

impl WindowHandle for FakeWindow {
    fn role(&self) -> Option<String> { self.0.borrow().role.clone() }

    fn subrole(&self) -> Option<String> { self.0.borrow().subrole.clone() }

    fn is_minimized(&self) -> Option<bool> { self.0.borrow().minimized }

    fn is_fullscreen(&self) -> Option<bool> { self.0.borrow().fullscreen }

    fn position(&self) -> Option<Point> { self.0.borrow().position }

    fn size(&self) -> Option<Size> { self.0.borrow().size }

    fn set_position(&self, position: Point) -> SnapResult<()> { self.record(Write::Position(position)) }

    fn set_size(&self, size: Size) -> SnapResult<()> { self.record(Write::Size(size)) }

    fn set_minimized(&self, minimized: bool) -> SnapResult<()> {
        self.record(Write::Minimized(minimized))
    }
}

#[derive(Debug, Clone)]
pub struct FakeApp {
    pub pid: i32,
    pub terminated: bool,
    pub windows: Option<Vec<FakeWindow>>,
    pub focused: Option<FakeWindow>,
}

impl FakeApp {
    pub fn new(pid: i32, windows: Vec<FakeWindow>) -> Self {
        let focused = windows.first().cloned();
        Self {
            pid,
            terminated: false,
            windows: Some(windows),
            focused,
        }
    }
}

impl ApplicationHandle for FakeApp {
    type Window = FakeWindow;

    fn pid(&self) -> i32 { self.pid }

    fn is_terminated(&self) -> bool { self.terminated }

    fn windows(&self) -> Option<Vec<FakeWindow>> { self.windows.clone() }

    fn focused_window(&self) -> Option<FakeWindow> { self.focused.clone() }
}

#[derive(Debug, Clone)]
pub struct FakeDesktop {
    pub trusted: bool,
    pub apps: HashMap<i32, FakeApp>,
    pub frontmost: Option<i32>,
    pub screens: Vec<ScreenInfo>,
}

impl FakeDesktop {
    pub fn new(screens: Vec<ScreenInfo>) -> Self {
        Self {
            trusted: true,
            apps: HashMap::new(),
            frontmost: None,
            screens,
        }
    }

    pub fn with_app(mut self, app: FakeApp) -> Self {
        self.apps.insert(app.pid, app);
        self
    }
}

impl Desktop for FakeDesktop {
    type App = FakeApp;

    fn is_trusted(&self) -> bool { self.trusted }

    fn application(&self, pid: i32) -> Option<FakeApp> { self.apps.get(&pid).cloned() }

    fn frontmost_application(&self) -> Option<FakeApp> {
        self.frontmost.and_then(|pid| self.application(pid))
    }

    fn screens(&self) -> Vec<ScreenInfo> { self.screens.clone() }
}
