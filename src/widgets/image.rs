//! Image widget.

use serde_json::Value;

use crate::markup::{Element, Markup};
use crate::settings::Settings;
use crate::style::inline_declarations;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// ImageWidget
// ---------------------------------------------------------------------------

/// Renders an `img` from the `src` setting (or, for media attached by the
/// CMS, `data.src`). Without a usable source nothing is rendered.
pub struct ImageWidget;

impl Widget for ImageWidget {
    fn widget_type(&self) -> &str {
        "image"
    }

    fn render(&self, settings: &Settings, data: &Value) -> Markup {
        let src = settings
            .get("src")
            .and_then(Value::as_str)
            .or_else(|| data.get("src").and_then(Value::as_str));
        let Some(src) = src else {
            return Markup::text("");
        };
        let mut element = Element::new("img")
            .class("widget-image")
            .styles(inline_declarations(settings))
            .attr("src", src);
        if let Some(alt) = settings.get("alt").and_then(Value::as_str) {
            element = element.attr("alt", alt);
        }
        element.into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
