//! Property tests for the snapping core, run through the public API only.
//!
//! A small in-memory desktop stands in for the Accessibility API so the whole
//! snap path (eligibility, screen choice, planning, conversion and move
//! suppression) can be checked across a grid of screens and margins.

use std::cell::RefCell;
use std::rc::Rc;

use recenter_lib::snap::{
    ApplicationHandle, Desktop, MIN_TARGET_EXTENT, MIN_WINDOW_AREA, Point, Rect, STANDARD_WINDOW_ROLE,
    STANDARD_WINDOW_SUBROLE, ScreenInfo, Size, SnapMode, SnapOutcome, SnapResult, Snapper, WindowHandle,
    is_eligible, plan_frame, to_accessibility,
};

// ============================================================================
// In-memory desktop
// ============================================================================

#[derive(Debug)]
struct State {
    role: Option<String>,
    subrole: Option<String>,
    minimized: bool,
    fullscreen: bool,
    position: Point,
    size: Size,
    writes: usize,
}

#[derive(Debug, Clone)]
struct Window(Rc<RefCell<State>>);

impl Window {
    fn new(role: &str, size: Size) -> Self {
        Self(Rc::new(RefCell::new(State {
            role: Some(role.to_string()),
            subrole: Some(STANDARD_WINDOW_SUBROLE.to_string()),
            minimized: false,
            fullscreen: false,
            position: Point::new(33.0, 77.0),
            size,
            writes: 0,
        })))
    }

    fn standard() -> Self { Self::new(STANDARD_WINDOW_ROLE, Size::new(900.0, 700.0)) }

    fn writes(&self) -> usize { self.0.borrow().writes }
}

impl WindowHandle for Window {
    fn role(&self) -> Option<String> { self.0.borrow().role.clone() }

    fn subrole(&self) -> Option<String> { self.0.borrow().subrole.clone() }

    fn is_minimized(&self) -> Option<bool> { Some(self.0.borrow().minimized) }

    fn is_fullscreen(&self) -> Option<bool> { Some(self.0.borrow().fullscreen) }

    fn position(&self) -> Option<Point> { Some(self.0.borrow().position) }

    fn size(&self) -> Option<Size> { Some(self.0.borrow().size) }

    fn set_position(&self, position: Point) -> SnapResult<()> {
        let mut state = self.0.borrow_mut();
        state.position = position;
        state.writes += 1;
        Ok(())
    }

    fn set_size(&self, size: Size) -> SnapResult<()> {
        let mut state = self.0.borrow_mut();
        state.size = size;
        state.writes += 1;
        Ok(())
    }

    fn set_minimized(&self, minimized: bool) -> SnapResult<()> {
        let mut state = self.0.borrow_mut();
        state.minimized = minimized;
        state.writes += 1;
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct App {
    window: Window,
}

impl ApplicationHandle for App {
    type Window = Window;

    fn pid(&self) -> i32 { 4242 }

    fn is_terminated(&self) -> bool { false }

    fn windows(&self) -> Option<Vec<Window>> { Some(vec![self.window.clone()]) }

    fn focused_window(&self) -> Option<Window> { Some(self.window.clone()) }
}

struct SingleAppDesktop {
    app: App,
    screen: ScreenInfo,
}

impl Desktop for SingleAppDesktop {
    type App = App;

    fn is_trusted(&self) -> bool { true }

    fn application(&self, pid: i32) -> Option<App> { (pid == 4242).then(|| self.app.clone()) }

    fn frontmost_application(&self) -> Option<App> { Some(self.app.clone()) }

    fn screens(&self) -> Vec<ScreenInfo> { vec![self.screen.clone()] }
}

// ============================================================================
// Grids
// ============================================================================

const MARGINS: [f64; 9] = [0.0, 1.0, 8.0, 40.0, 80.0, 300.0, 636.0, 1000.0, 100_000.0];

/// Visible frames (display space), each paired with its full frame.
fn screens() -> Vec<ScreenInfo> {
    [
        (Rect::new(0.0, 0.0, 1512.0, 982.0), Rect::new(0.0, 0.0, 1512.0, 945.0)),
        (Rect::new(0.0, 0.0, 1920.0, 1080.0), Rect::new(0.0, 70.0, 1920.0, 985.0)),
        (Rect::new(0.0, 0.0, 2560.0, 1440.0), Rect::new(0.0, 0.0, 2560.0, 1415.0)),
        (Rect::new(0.0, 0.0, 1024.0, 768.0), Rect::new(0.0, 0.0, 1024.0, 743.0)),
        (Rect::new(0.0, 0.0, 300.0, 300.0), Rect::new(0.0, 0.0, 300.0, 275.0)),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, (frame, visible))| ScreenInfo::new(id as u32 + 1, frame, visible, true))
    .collect()
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_non_standard_roles_are_never_eligible() {
    for role in ["AXSheet", "AXDrawer", "AXPopover", "AXDialog", ""] {
        for size in [Size::new(400.0, 300.0), Size::new(3000.0, 2000.0)] {
            let window = Window::new(role, size);
            for allow_minimized in [false, true] {
                assert!(!is_eligible(&window, allow_minimized), "role {role:?} size {size:?}");
            }
        }
    }
}

#[test]
fn test_small_windows_are_never_eligible() {
    for (width, height) in [(100.0, 199.0), (199.0, 100.0), (141.0, 141.0), (10_000.0, 1.9)] {
        let size = Size::new(width, height);
        assert!(size.area() < MIN_WINDOW_AREA);
        assert!(!is_eligible(&Window::new(STANDARD_WINDOW_ROLE, size), true));
    }
}

#[test]
fn test_planned_frame_never_below_floor() {
    for screen in screens() {
        for margin in MARGINS {
            let frame = plan_frame(screen.visible_frame, margin);
            let visible = screen.visible_frame;
            assert!(
                frame.width >= MIN_TARGET_EXTENT.min(visible.width),
                "width {frame} for {visible} margin {margin}"
            );
            assert!(
                frame.height >= MIN_TARGET_EXTENT.min(visible.height),
                "height {frame} for {visible} margin {margin}"
            );
            assert!(frame.width <= visible.width && frame.height <= visible.height);
        }
    }
}

#[test]
fn test_planned_frame_is_horizontally_centered() {
    for screen in screens() {
        for margin in MARGINS {
            let frame = plan_frame(screen.visible_frame, margin);
            assert!((frame.mid_x() - screen.visible_frame.mid_x()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_second_snap_writes_nothing() {
    for screen in screens() {
        for margin in MARGINS {
            let window = Window::standard();
            let desktop = SingleAppDesktop { app: App { window: window.clone() }, screen: screen.clone() };
            let snapper = Snapper::new(desktop, 1);

            let first = snapper.snap_application(4242, SnapMode::Launch, margin);
            assert!(matches!(first, SnapOutcome::Moved { .. }), "{first:?}");
            let writes = window.writes();

            let second = snapper.snap_application(4242, SnapMode::Launch, margin);
            assert_eq!(second, SnapOutcome::AlreadyPlaced { pid: 4242 });
            assert_eq!(window.writes(), writes);
        }
    }
}

#[test]
fn test_snapped_frame_matches_plan_in_accessibility_space() {
    for screen in screens() {
        let window = Window::standard();
        let desktop = SingleAppDesktop { app: App { window: window.clone() }, screen: screen.clone() };
        let outcome = Snapper::new(desktop, 1).snap_frontmost(80.0);

        let expected = to_accessibility(plan_frame(screen.visible_frame, 80.0), screen.frame.max_y());
        assert_eq!(outcome, SnapOutcome::Moved { pid: 4242, frame: expected });
        assert_eq!(window.frame(), Some(expected));
    }
}

#[test]
fn test_laptop_examples() {
    let visible = Rect::new(0.0, 0.0, 1512.0, 945.0);
    assert_eq!(plan_frame(visible, 80.0), Rect::new(80.0, 24.0, 1352.0, 897.0));
    assert_eq!(plan_frame(visible, 1000.0), Rect::new(636.0, 24.0, 240.0, 897.0));
}
