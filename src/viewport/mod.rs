//! Viewport observation: breakpoint detection over a live viewport.
//!
//! The [`Viewport`] trait abstracts wherever the width actually comes from
//! (a browser window, a host shell, a fixed test harness). The
//! [`ViewportObserver`] service classifies the width into a
//! [`Breakpoint`](crate::breakpoint::Breakpoint), fans resize notifications
//! out to subscribers, and keeps exactly one underlying resize listener
//! installed while anyone is subscribed.

pub mod fixed;
pub mod observer;

pub use fixed::FixedViewport;
pub use observer::{ResizeCallback, Subscription, Viewport, ViewportObserver};
