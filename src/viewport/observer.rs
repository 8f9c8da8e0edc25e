//! ViewportObserver: subscriber-counted breakpoint detection.
//!
//! One observer serves many consumers. The underlying resize listener is
//! installed on the viewport when the first subscriber attaches and removed
//! when the last [`Subscription`] is dropped, so concurrent consumers never
//! stack duplicate listeners on the host.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use crate::breakpoint::Breakpoint;

// ---------------------------------------------------------------------------
// Viewport trait
// ---------------------------------------------------------------------------

/// Callback handed to a [`Viewport`] when the observer installs its listener.
///
/// The viewport invokes it on every resize event.
pub type ResizeCallback = Arc<dyn Fn() + Send + Sync>;

/// A source of viewport width plus hooks for the native resize listener.
///
/// Implementations wrap whatever host provides the width. [`FixedViewport`]
/// (a settable width for tests and headless rendering) is the built-in
/// implementation.
///
/// [`FixedViewport`]: crate::viewport::FixedViewport
pub trait Viewport: Send + Sync {
    /// The current viewport width, or `None` when no viewport is available.
    fn width(&self) -> Option<u32>;

    /// Install the native resize listener. Called once, when the observer
    /// gains its first subscriber.
    fn install_listener(&self, on_resize: ResizeCallback);

    /// Remove the native resize listener. Called once, when the observer's
    /// last subscriber detaches.
    fn remove_listener(&self);
}

// ---------------------------------------------------------------------------
// ViewportObserver
// ---------------------------------------------------------------------------

struct Inner {
    viewport: Arc<dyn Viewport>,
    /// Last classified breakpoint, used to suppress no-op notifications.
    last: Mutex<Breakpoint>,
    subscribers: Mutex<HashMap<u64, Box<dyn Fn(Breakpoint) + Send + Sync>>>,
    next_id: AtomicU64,
}

/// Shared breakpoint detector over a [`Viewport`].
///
/// `current()` always re-reads the live width, so it never goes stale even
/// with zero subscribers. Subscribers are notified when a resize event moves
/// the width across a breakpoint boundary; resize events that stay within
/// one breakpoint are coalesced away, which is observably equivalent since
/// only the settled breakpoint matters.
#[derive(Clone)]
pub struct ViewportObserver {
    inner: Arc<Inner>,
}

impl ViewportObserver {
    /// Create an observer over the given viewport.
    pub fn new(viewport: impl Viewport + 'static) -> Self {
        let viewport: Arc<dyn Viewport> = Arc::new(viewport);
        let initial = Breakpoint::classify(viewport.width());
        Self {
            inner: Arc::new(Inner {
                viewport,
                last: Mutex::new(initial),
                subscribers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Classify the live viewport width.
    pub fn current(&self) -> Breakpoint {
        Breakpoint::classify(self.inner.viewport.width())
    }

    /// Subscribe to breakpoint changes.
    ///
    /// The first subscriber installs the resize listener on the viewport.
    /// Dropping the returned [`Subscription`] detaches; the last detach
    /// removes the listener.
    pub fn subscribe(
        &self,
        on_change: impl Fn(Breakpoint) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let first = {
            let mut subs = self.inner.subscribers.lock().expect("subscriber lock");
            subs.insert(id, Box::new(on_change));
            subs.len() == 1
        };
        if first {
            // Weak reference: the viewport holds the callback for as long as
            // the listener is installed, and the observer holds the viewport.
            let weak: Weak<Inner> = Arc::downgrade(&self.inner);
            let callback: ResizeCallback = Arc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::handle_resize(&inner);
                }
            });
            self.inner.viewport.install_listener(callback);
            debug!("viewport resize listener installed");
        }
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().expect("subscriber lock").len()
    }

    fn handle_resize(inner: &Arc<Inner>) {
        let current = Breakpoint::classify(inner.viewport.width());
        {
            let mut last = inner.last.lock().expect("breakpoint lock");
            if *last == current {
                return;
            }
            *last = current;
        }
        let subs = inner.subscribers.lock().expect("subscriber lock");
        for callback in subs.values() {
            callback(current);
        }
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// RAII handle for one subscriber. Dropping it detaches the subscriber and,
/// if it was the last one, removes the viewport's resize listener.
pub struct Subscription {
    inner: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let empty = {
            let mut subs = inner.subscribers.lock().expect("subscriber lock");
            subs.remove(&self.id);
            subs.is_empty()
        };
        if empty {
            inner.viewport.remove_listener();
            debug!("viewport resize listener removed");
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
