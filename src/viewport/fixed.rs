//! FixedViewport: a settable viewport for tests and headless rendering.
//!
//! Plays the role of `App::new_headless` for breakpoint-dependent code:
//! the width is whatever the harness says it is, and `set_width` fires the
//! installed resize listener the way a real host would.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::viewport::observer::{ResizeCallback, Viewport};

// ---------------------------------------------------------------------------
// FixedViewport
// ---------------------------------------------------------------------------

struct FixedInner {
    width: Mutex<Option<u32>>,
    listener: Mutex<Option<ResizeCallback>>,
    installs: AtomicUsize,
    removals: AtomicUsize,
}

/// A viewport with an externally controlled width.
///
/// Clones share state, so a test can keep one handle to drive resizes while
/// the observer owns another.
#[derive(Clone)]
pub struct FixedViewport {
    inner: Arc<FixedInner>,
}

impl FixedViewport {
    /// Create a viewport with the given width (`None` = no viewport).
    pub fn new(width: Option<u32>) -> Self {
        Self {
            inner: Arc::new(FixedInner {
                width: Mutex::new(width),
                listener: Mutex::new(None),
                installs: AtomicUsize::new(0),
                removals: AtomicUsize::new(0),
            }),
        }
    }

    /// Change the width and fire the resize listener, if one is installed.
    pub fn set_width(&self, width: Option<u32>) {
        *self.inner.width.lock().expect("width lock") = width;
        let listener = self.inner.listener.lock().expect("listener lock").clone();
        if let Some(callback) = listener {
            callback();
        }
    }

    /// Whether a resize listener is currently installed.
    pub fn listener_installed(&self) -> bool {
        self.inner.listener.lock().expect("listener lock").is_some()
    }

    /// How many times a listener has been installed.
    pub fn install_count(&self) -> usize {
        self.inner.installs.load(Ordering::SeqCst)
    }

    /// How many times the listener has been removed.
    pub fn removal_count(&self) -> usize {
        self.inner.removals.load(Ordering::SeqCst)
    }
}

impl Viewport for FixedViewport {
    fn width(&self) -> Option<u32> {
        *self.inner.width.lock().expect("width lock")
    }

    fn install_listener(&self, on_resize: ResizeCallback) {
        *self.inner.listener.lock().expect("listener lock") = Some(on_resize);
        self.inner.installs.fetch_add(1, Ordering::SeqCst);
    }

    fn remove_listener(&self) {
        *self.inner.listener.lock().expect("listener lock") = None;
        self.inner.removals.fetch_add(1, Ordering::SeqCst);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
