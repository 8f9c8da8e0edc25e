//! WidgetRegistry: string-keyed widget dispatch.
//!
//! Maps an authored type tag to its [`Widget`] implementation. Dispatch
//! resolves visibility first (a hidden node renders nothing regardless of
//! its type), then the tag; an unknown tag is an explicit
//! [`RenderOutcome::Unsupported`] — never a panic, never a silent null.

use std::collections::HashMap;

use tracing::warn;

use crate::breakpoint::Breakpoint;
use crate::content::WidgetNode;
use crate::markup::Markup;
use crate::widget::traits::Widget;
use crate::widgets::{ButtonWidget, ImageWidget, SpacerWidget, TextWidget};

// ---------------------------------------------------------------------------
// RenderOutcome
// ---------------------------------------------------------------------------

/// What became of one widget node.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The widget rendered.
    Rendered(Markup),
    /// The node is hidden at the active breakpoint.
    Hidden,
    /// No widget is registered for the node's type tag.
    Unsupported(String),
}

impl RenderOutcome {
    /// The markup, if the node rendered.
    pub fn into_markup(self) -> Option<Markup> {
        match self {
            Self::Rendered(markup) => Some(markup),
            Self::Hidden | Self::Unsupported(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// WidgetRegistry
// ---------------------------------------------------------------------------

/// Registry of widget renderers, keyed by type tag.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, Box<dyn Widget>>,
}

impl WidgetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in widgets registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextWidget));
        registry.register(Box::new(ImageWidget));
        registry.register(Box::new(ButtonWidget));
        registry.register(Box::new(SpacerWidget));
        registry
    }

    /// Register a widget under its own type tag. A later registration for
    /// the same tag replaces the earlier one.
    pub fn register(&mut self, widget: Box<dyn Widget>) {
        self.widgets.insert(widget.widget_type().to_owned(), widget);
    }

    /// Whether a tag is registered.
    pub fn supports(&self, widget_type: &str) -> bool {
        self.widgets.contains_key(widget_type)
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Dispatch one node at a breakpoint.
    pub fn render(&self, node: &WidgetNode, breakpoint: Breakpoint) -> RenderOutcome {
        if node.settings.hidden_at(breakpoint) {
            return RenderOutcome::Hidden;
        }
        match self.widgets.get(&node.widget_type) {
            Some(widget) => {
                let merged = node.settings.merged_at(breakpoint);
                RenderOutcome::Rendered(widget.render(&merged, &node.data))
            }
            None => {
                warn!(widget_type = %node.widget_type, "unsupported widget type");
                RenderOutcome::Unsupported(node.widget_type.clone())
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;
    use crate::settings::Settings;
    use serde_json::{json, Value};

    struct Stub(&'static str);

    impl Widget for Stub {
        fn widget_type(&self) -> &str {
            self.0
        }

        fn render(&self, _settings: &Settings, _data: &Value) -> Markup {
            Element::new("i").text(self.0).into()
        }
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let registry = WidgetRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.supports("text"));
    }

    #[test]
    fn with_builtins_registers_all() {
        let registry = WidgetRegistry::with_builtins();
        assert_eq!(registry.len(), 4);
        for tag in ["text", "image", "button", "spacer"] {
            assert!(registry.supports(tag), "missing builtin {tag}");
        }
    }

    #[test]
    fn later_registration_replaces() {
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Stub("x")));
        registry.register(Box::new(Stub("x")));
        assert_eq!(registry.len(), 1);
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    fn node(tag: &str) -> WidgetNode {
        WidgetNode::new(tag)
    }

    #[test]
    fn renders_registered_widget() {
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Stub("x")));
        let outcome = registry.render(&node("x"), Breakpoint::Desktop);
        assert_eq!(
            outcome.into_markup().unwrap().to_html(),
            "<i>x</i>"
        );
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let registry = WidgetRegistry::new();
        match registry.render(&node("carousel"), Breakpoint::Desktop) {
            RenderOutcome::Unsupported(tag) => assert_eq!(tag, "carousel"),
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn hidden_node_short_circuits() {
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Stub("x")));
        let hidden = node("x").with_settings(Settings::new().with("hidden", true));
        assert!(matches!(
            registry.render(&hidden, Breakpoint::Desktop),
            RenderOutcome::Hidden
        ));
    }

    #[test]
    fn hidden_wins_over_unsupported() {
        let registry = WidgetRegistry::new();
        let hidden = node("carousel").with_settings(Settings::new().with("hidden", true));
        assert!(matches!(
            registry.render(&hidden, Breakpoint::Desktop),
            RenderOutcome::Hidden
        ));
    }

    #[test]
    fn hidden_respects_breakpoint_overrides() {
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Stub("x")));
        let node = node("x").with_settings(Settings::from_value(json!({
            "responsive": { "mobile": { "hidden": true } }
        })));

        assert!(matches!(
            registry.render(&node, Breakpoint::Desktop),
            RenderOutcome::Rendered(_)
        ));
        assert!(matches!(
            registry.render(&node, Breakpoint::Mobile),
            RenderOutcome::Hidden
        ));
    }

    #[test]
    fn widget_receives_merged_settings() {
        struct Echo;
        impl Widget for Echo {
            fn widget_type(&self) -> &str {
                "echo"
            }
            fn render(&self, settings: &Settings, _data: &Value) -> Markup {
                let size = settings.get("size").and_then(Value::as_i64).unwrap_or(0);
                Element::new("b").text(size.to_string()).into()
            }
        }
        let mut registry = WidgetRegistry::new();
        registry.register(Box::new(Echo));
        let node = node("echo").with_settings(Settings::from_value(json!({
            "size": 10,
            "responsive": { "mobile": { "size": 4 } }
        })));

        let desktop = registry.render(&node, Breakpoint::Desktop);
        assert_eq!(desktop.into_markup().unwrap().to_html(), "<b>10</b>");
        let mobile = registry.render(&node, Breakpoint::Mobile);
        assert_eq!(mobile.into_markup().unwrap().to_html(), "<b>4</b>");
    }
}
