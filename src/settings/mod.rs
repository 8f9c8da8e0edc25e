//! Author-specified settings with per-breakpoint overrides.
//!
//! - [`model`] — the dynamic settings bag and raw access to overrides.
//! - [`resolve`] — breakpoint-aware resolution: effective values, merged
//!   views, hidden flags, column stacking, and the observer-bound
//!   [`SettingsResolver`].

pub mod model;
pub mod resolve;

pub use model::{Settings, HIDDEN_KEY, RESPONSIVE_KEY, STACK_ON_MOBILE_KEY, STACK_ON_TABLET_KEY};
pub use resolve::{should_stack, SettingsResolver};
