//! Spacer widget: vertical whitespace.

use serde_json::Value;

use crate::markup::{Element, Markup};
use crate::settings::Settings;
use crate::widget::Widget;

/// Default spacer height in pixels.
const DEFAULT_HEIGHT: f64 = 16.0;

// ---------------------------------------------------------------------------
// SpacerWidget
// ---------------------------------------------------------------------------

/// An empty block whose `height` setting (pixels) sets its size.
pub struct SpacerWidget;

impl Widget for SpacerWidget {
    fn widget_type(&self) -> &str {
        "spacer"
    }

    fn render(&self, settings: &Settings, _data: &Value) -> Markup {
        let height = settings
            .get("height")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_HEIGHT);
        Element::new("div")
            .class("widget-spacer")
            .style("height", format!("{height}px"))
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
