//! Safe wrappers for macOS Accessibility API (`AXUIElement`).
//!
//! [`AXElement`] wraps an `AXUIElementRef`, manages its reference count, and
//! implements [`WindowHandle`] so the snapper can read and write windows without
//! touching FFI.
//!
//! # Memory Management
//!
//! `AXElement` uses RAII to manage the underlying `AXUIElementRef`. When an
//! `AXElement` is dropped, it automatically calls `CFRelease`. Cloning an
//! `AXElement` calls `CFRetain` to increment the reference count.

use std::cell::OnceCell;
use std::ffi::c_void;
use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::string::CFString;
use core_graphics::geometry::{CGPoint, CGSize};

use crate::snap::{Point, Size, SnapError, SnapResult, WindowHandle};

// ============================================================================
// FFI Declarations
// ============================================================================

type AXUIElementRef = *mut c_void;
type AXError = i32;

const K_AX_ERROR_SUCCESS: AXError = 0;
const K_AX_ERROR_API_DISABLED: AXError = -25211;
const K_AX_ERROR_INVALID_UI_ELEMENT: AXError = -25202;
const K_AX_ERROR_ATTRIBUTE_UNSUPPORTED: AXError = -25205;
const K_AX_ERROR_NOT_IMPLEMENTED: AXError = -25208;
const K_AX_ERROR_CANNOT_COMPLETE: AXError = -25204;

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXUIElementCreateApplication(pid: i32) -> AXUIElementRef;
    fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: *const c_void,
        value: *mut *mut c_void,
    ) -> AXError;
    fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: *const c_void,
        value: *const c_void,
    ) -> AXError;
    fn AXUIElementGetTypeID() -> u64;
    fn AXValueCreate(value_type: i32, value: *const c_void) -> *mut c_void;
    fn AXValueGetValue(value: *const c_void, value_type: i32, value_ptr: *mut c_void) -> bool;
}

#[link(name = "CoreFoundation", kind = "framework")]
unsafe extern "C" {
    fn CFGetTypeID(cf: *const c_void) -> u64;
    fn CFArrayGetCount(array: *const c_void) -> i64;
    fn CFArrayGetValueAtIndex(array: *const c_void, idx: i64) -> *const c_void;
    fn CFRelease(cf: *const c_void);
    fn CFRetain(cf: *const c_void) -> *const c_void;
}

// ============================================================================
// Attributes
// ============================================================================

/// Accessibility attributes read or written by the snapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Windows,
    FocusedWindow,
    Role,
    Subrole,
    Minimized,
    FullScreen,
    Position,
    Size,
}

impl Attribute {
    const ALL: [Self; 8] = [
        Self::Windows,
        Self::FocusedWindow,
        Self::Role,
        Self::Subrole,
        Self::Minimized,
        Self::FullScreen,
        Self::Position,
        Self::Size,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Windows => "AXWindows",
            Self::FocusedWindow => "AXFocusedWindow",
            Self::Role => "AXRole",
            Self::Subrole => "AXSubrole",
            Self::Minimized => "AXMinimized",
            Self::FullScreen => "AXFullScreen",
            Self::Position => "AXPosition",
            Self::Size => "AXSize",
        }
    }

    /// The attribute name as a `CFStringRef`, created once per thread.
    fn as_cf(self) -> *const c_void {
        thread_local! {
            static NAMES: [OnceCell<CFString>; Attribute::ALL.len()] =
                const { [const { OnceCell::new() }; Attribute::ALL.len()] };
        }

        NAMES.with(|names| {
            names[self as usize]
                .get_or_init(|| CFString::new(self.name()))
                .as_concrete_TypeRef()
                .cast()
        })
    }
}

/// Plain structs carried inside an `AXValue`.
trait AxValueKind: Copy {
    /// `AXValueType` tag.
    const KIND: i32;
    const CREATE: &'static str;

    fn zero() -> Self;
}

impl AxValueKind for CGPoint {
    const KIND: i32 = 1;
    const CREATE: &'static str = "AXValueCreate(CGPoint)";

    fn zero() -> Self { Self::new(0.0, 0.0) }
}

impl AxValueKind for CGSize {
    const KIND: i32 = 2;
    const CREATE: &'static str = "AXValueCreate(CGSize)";

    fn zero() -> Self { Self::new(0.0, 0.0) }
}

/// A +1 Core Foundation reference, released on drop.
struct Owned(*mut c_void);

impl Owned {
    fn is_a(&self, type_id: u64) -> bool { unsafe { CFGetTypeID(self.0) } == type_id }

    /// Hands the reference to the caller without releasing it.
    fn into_raw(self) -> *mut c_void {
        let raw = self.0;
        std::mem::forget(self);
        raw
    }
}

impl Drop for Owned {
    fn drop(&mut self) { unsafe { CFRelease(self.0) } }
}

// ============================================================================
// AXElement
// ============================================================================

/// A safe wrapper around `AXUIElementRef`.
///
/// Represents either an application element or a window element.
pub struct AXElement {
    /// The underlying `AXUIElementRef`. Never null for a valid `AXElement`.
    raw: AXUIElementRef,
}

impl AXElement {
    /// Creates an `AXElement` for an application by its process ID.
    ///
    /// Returns `None` if the application element cannot be created. Creation
    /// succeeds for any pid; a dead process only shows up when attributes are read.
    #[must_use]
    pub fn application(pid: i32) -> Option<Self> {
        let raw = unsafe { AXUIElementCreateApplication(pid) };
        unsafe { Self::from_raw(raw) }
    }

    /// Creates an `AXElement` from a raw pointer, taking ownership.
    ///
    /// Returns `None` if the pointer is null.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    /// - The pointer is a valid `AXUIElementRef`
    /// - The caller transfers ownership (does not call `CFRelease` separately)
    #[must_use]
    pub const unsafe fn from_raw(raw: AXUIElementRef) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Self { raw })
        }
    }

    /// Gets all windows of this application, in the order the system reports them.
    ///
    /// Returns `None` if the window list cannot be read (no permission, process
    /// gone, app not responding).
    #[must_use]
    pub fn windows(&self) -> Option<Vec<Self>> {
        let list = self.copy(Attribute::Windows)?;
        let count = unsafe { CFArrayGetCount(list.0) };
        let element_type = unsafe { AXUIElementGetTypeID() };

        let windows = (0..count)
            .map(|index| unsafe { CFArrayGetValueAtIndex(list.0, index) })
            .filter(|item| !item.is_null() && unsafe { CFGetTypeID(*item) } == element_type)
            .map(|item| {
                // Array items are borrowed
                unsafe { CFRetain(item) };
                Self { raw: item.cast_mut() }
            })
            .collect();

        Some(windows)
    }

    /// Gets the focused window of this application.
    #[must_use]
    pub fn focused_window(&self) -> Option<Self> {
        let window = self.copy(Attribute::FocusedWindow)?;
        unsafe { Self::from_raw(window.into_raw()) }
    }

    /// Copies an attribute value; `None` for any AX error or a null value.
    fn copy(&self, attr: Attribute) -> Option<Owned> {
        let mut value: *mut c_void = ptr::null_mut();
        let result = unsafe { AXUIElementCopyAttributeValue(self.raw, attr.as_cf(), &raw mut value) };
        (result == K_AX_ERROR_SUCCESS && !value.is_null()).then(|| Owned(value))
    }

    fn string(&self, attr: Attribute) -> Option<String> {
        let value = self.copy(attr)?;
        value
            .is_a(CFString::type_id() as u64)
            .then(|| unsafe { CFString::wrap_under_get_rule(value.0.cast()) }.to_string())
    }

    fn boolean(&self, attr: Attribute) -> Option<bool> {
        let value = self.copy(attr)?;
        value
            .is_a(CFBoolean::type_id() as u64)
            .then(|| unsafe { CFBoolean::wrap_under_get_rule(value.0.cast()) }.into())
    }

    fn unpack<T: AxValueKind>(&self, attr: Attribute) -> Option<T> {
        let value = self.copy(attr)?;
        let mut out = T::zero();
        unsafe { AXValueGetValue(value.0.cast_const(), T::KIND, (&raw mut out).cast()) }
            .then_some(out)
    }

    fn set(&self, attr: Attribute, value: *const c_void, operation: &str) -> SnapResult<()> {
        let result = unsafe { AXUIElementSetAttributeValue(self.raw, attr.as_cf(), value) };
        ax_result(result, operation)
    }

    fn set_packed<T: AxValueKind>(&self, attr: Attribute, value: T, operation: &str) -> SnapResult<()> {
        let packed = unsafe { AXValueCreate(T::KIND, (&raw const value).cast()) };
        if packed.is_null() {
            return Err(SnapError::null_pointer(T::CREATE));
        }

        let packed = Owned(packed);
        self.set(attr, packed.0.cast_const(), operation)
    }
}

impl WindowHandle for AXElement {
    fn role(&self) -> Option<String> { self.string(Attribute::Role) }

    fn subrole(&self) -> Option<String> { self.string(Attribute::Subrole) }

    fn is_minimized(&self) -> Option<bool> { self.boolean(Attribute::Minimized) }

    fn is_fullscreen(&self) -> Option<bool> { self.boolean(Attribute::FullScreen) }

    fn position(&self) -> Option<Point> {
        self.unpack::<CGPoint>(Attribute::Position).map(|point| Point::new(point.x, point.y))
    }

    fn size(&self) -> Option<Size> {
        self.unpack::<CGSize>(Attribute::Size).map(|size| Size::new(size.width, size.height))
    }

    fn set_position(&self, position: Point) -> SnapResult<()> {
        let point = CGPoint::new(position.x, position.y);
        self.set_packed(Attribute::Position, point, "set position")
    }

    fn set_size(&self, size: Size) -> SnapResult<()> {
        let size = CGSize::new(size.width, size.height);
        self.set_packed(Attribute::Size, size, "set size")
    }

    fn set_minimized(&self, minimized: bool) -> SnapResult<()> {
        let flag = if minimized { CFBoolean::true_value() } else { CFBoolean::false_value() };
        self.set(Attribute::Minimized, flag.as_concrete_TypeRef().cast(), "set minimized")
    }
}

impl Drop for AXElement {
    fn drop(&mut self) {
        // SAFETY: self.raw is guaranteed to be valid and non-null
        unsafe { CFRelease(self.raw.cast()) };
    }
}

impl Clone for AXElement {
    fn clone(&self) -> Self {
        // SAFETY: self.raw is guaranteed to be valid and non-null
        unsafe { CFRetain(self.raw.cast()) };
        Self { raw: self.raw }
    }
}

impl std::fmt::Debug for AXElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AXElement")
            .field("raw", &self.raw)
            .field("role", &self.role())
            .field("subrole", &self.subrole())
            .finish()
    }
}

/// Maps an AX error code to a `SnapResult`, naming the failed operation.
fn ax_result(result: AXError, operation: &str) -> SnapResult<()> {
    let reason = match result {
        K_AX_ERROR_SUCCESS => return Ok(()),
        K_AX_ERROR_API_DISABLED => "Accessibility access not granted",
        K_AX_ERROR_INVALID_UI_ELEMENT => "Invalid UI element",
        K_AX_ERROR_ATTRIBUTE_UNSUPPORTED => "Attribute unsupported",
        K_AX_ERROR_NOT_IMPLEMENTED => "Not implemented",
        K_AX_ERROR_CANNOT_COMPLETE => "Cannot complete operation",
        _ => "Unknown error",
    };
    Err(SnapError::accessibility(result, format!("{operation}: {reason}")))
}
