//! Text widget: a block of authored text.

use serde_json::Value;

use crate::markup::{Element, Markup};
use crate::settings::Settings;
use crate::style::inline_declarations;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// TextWidget
// ---------------------------------------------------------------------------

/// Renders the `text` setting inside a tag chosen by the `tag` setting
/// (default `p`). Visual settings become inline styles.
pub struct TextWidget;

impl Widget for TextWidget {
    fn widget_type(&self) -> &str {
        "text"
    }

    fn render(&self, settings: &Settings, _data: &Value) -> Markup {
        let tag = settings.get("tag").and_then(Value::as_str).unwrap_or("p");
        let text = settings.get("text").and_then(Value::as_str).unwrap_or("");
        Element::new(tag)
            .class("widget-text")
            .styles(inline_declarations(settings))
            .text(text)
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
