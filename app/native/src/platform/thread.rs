//! Main-thread dispatch through Grand Central Dispatch.
//!
//! AppKit and the Accessibility API expect to be driven from the main thread;
//! background workers hand their work over with [`dispatch_on_main`].

use std::ffi::c_void;

/// Dispatch queue type alias.
type DispatchQueue = *const c_void;

#[link(name = "System", kind = "dylib")]
unsafe extern "C" {
    /// The main dispatch queue (this is the actual symbol, not the macro).
    static _dispatch_main_q: c_void;
    fn dispatch_async_f(
        queue: DispatchQueue,
        context: *mut c_void,
        work: extern "C" fn(*mut c_void),
    );
    fn pthread_main_np() -> i32;
}

/// Returns the main dispatch queue.
///
/// This is equivalent to `dispatch_get_main_queue()` in C, which is a macro
/// that returns `&_dispatch_main_q`.
fn get_main_queue() -> DispatchQueue { std::ptr::addr_of!(_dispatch_main_q) }

/// Context for dispatching a closure to the main thread.
struct DispatchContext<F: FnOnce() + Send + 'static> {
    closure: Option<F>,
}

/// C-compatible trampoline function that executes the closure.
extern "C" fn dispatch_trampoline<F: FnOnce() + Send + 'static>(context: *mut c_void) {
    unsafe {
        let ctx = Box::from_raw(context.cast::<DispatchContext<F>>());
        if let Some(closure) = ctx.closure {
            closure();
        }
    }
}

/// Dispatches a closure to run on the main thread asynchronously.
///
/// Safe to call from any thread, including the main thread itself (the closure
/// then runs on a later turn of the run loop).
pub fn dispatch_on_main<F>(closure: F)
where F: FnOnce() + Send + 'static {
    let ctx = Box::new(DispatchContext { closure: Some(closure) });
    let ctx_ptr = Box::into_raw(ctx).cast::<c_void>();

    unsafe {
        let main_queue = get_main_queue();
        dispatch_async_f(main_queue, ctx_ptr, dispatch_trampoline::<F>);
    }
}

/// Returns `true` when called from the process's main thread.
#[must_use]
pub fn is_main_thread() -> bool { unsafe { pthread_main_np() != 0 } }
