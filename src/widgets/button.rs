//! Button widget: a styled link.

use serde_json::Value;

use crate::markup::{Element, Markup};
use crate::settings::Settings;
use crate::style::inline_declarations;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// ButtonWidget
// ---------------------------------------------------------------------------

/// Renders the `label` setting as a link, reading the `link` descriptor
/// (`{ "url": "/shop", "target": "_blank" }`). Without a URL the button
/// renders as an inert span.
pub struct ButtonWidget;

impl Widget for ButtonWidget {
    fn widget_type(&self) -> &str {
        "button"
    }

    fn render(&self, settings: &Settings, _data: &Value) -> Markup {
        let label = settings.get("label").and_then(Value::as_str).unwrap_or("");
        let link = settings.get("link").and_then(Value::as_object);
        let url = link.and_then(|l| l.get("url")).and_then(Value::as_str);

        let Some(url) = url else {
            return Element::new("span")
                .class("widget-button")
                .styles(inline_declarations(settings))
                .text(label)
                .into();
        };

        let mut element = Element::new("a")
            .class("widget-button")
            .styles(inline_declarations(settings))
            .attr("href", url);
        if let Some(target) = link
            .and_then(|l| l.get("target"))
            .and_then(Value::as_str)
        {
            element = element.attr("target", target);
        }
        element.text(label).into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_link_with_label() {
        let s = Settings::from_value(json!({
            "label": "Shop",
            "link": { "url": "/shop" }
        }));
        let out = ButtonWidget.render(&s, &Value::Null);
        assert_eq!(
            out.to_html(),
            r#"<a class="widget-button" href="/shop">Shop</a>"#
        );
    }

    #[test]
    fn target_is_carried_over() {
        let s = Settings::from_value(json!({
            "label": "Docs",
            "link": { "url": "https://example.com", "target": "_blank" }
        }));
        let out = ButtonWidget.render(&s, &Value::Null);
        assert_eq!(
            out.to_html(),
            r#"<a class="widget-button" href="https://example.com" target="_blank">Docs</a>"#
        );
    }

    #[test]
    fn missing_url_degrades_to_span() {
        let s = Settings::new().with("label", "Soon");
        let out = ButtonWidget.render(&s, &Value::Null);
        assert_eq!(out.to_html(), r#"<span class="widget-button">Soon</span>"#);
    }

    #[test]
    fn malformed_link_descriptor_tolerated() {
        let s = Settings::from_value(json!({ "label": "x", "link": "/shop" }));
        let out = ButtonWidget.render(&s, &Value::Null);
        assert_eq!(out.to_html(), r#"<span class="widget-button">x</span>"#);
    }

    #[test]
    fn visual_settings_apply() {
        let s = Settings::from_value(json!({
            "label": "Go",
            "link": { "url": "/" },
            "backgroundColor": "#000"
        }));
        let out = ButtonWidget.render(&s, &Value::Null);
        assert_eq!(
            out.to_html(),
            r#"<a class="widget-button" style="background-color:#000" href="/">Go</a>"#
        );
    }
}
