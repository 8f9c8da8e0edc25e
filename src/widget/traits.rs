//! The Widget trait.
//!
//! A widget turns one authored node into markup. It receives settings
//! already merged for the active breakpoint plus the node's opaque data
//! payload; breakpoint logic and visibility are the registry's concern, so
//! widget implementations stay pure presentation.

use serde_json::Value;

use crate::markup::Markup;
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// A renderer for one widget type.
///
/// Object-safe: registries hold `Box<dyn Widget>`.
pub trait Widget: Send + Sync {
    /// The type tag this widget answers to (`"text"`, `"image"`, ...).
    ///
    /// Used as the registry key.
    fn widget_type(&self) -> &str;

    /// Render into markup.
    ///
    /// `settings` is the merged view for the active breakpoint. `data` is
    /// the node's payload; widgets tolerate missing or malformed data the
    /// same way settings do — render what is usable, never panic.
    fn render(&self, settings: &Settings, data: &Value) -> Markup;
}

// ===========================================================================
// Tests
// ===========================================================================
