//! Page renderer: content tree → markup tree.
//!
//! Walks sections → columns → widgets at one breakpoint. Hidden nodes are
//! pruned, section settings decide whether their columns stack, and widget
//! dispatch goes through the registry. Unsupported widget types are warned
//! about by the registry and skipped here; one bad widget never takes the
//! page down.

use crate::breakpoint::Breakpoint;
use crate::content::{Column, PageContent, Section};
use crate::markup::{Element, Markup};
use crate::settings::should_stack;
use crate::style::inline_declarations;
use crate::widget::{RenderOutcome, WidgetRegistry};

// ---------------------------------------------------------------------------
// PageRenderer
// ---------------------------------------------------------------------------

/// Renders page content with a widget registry.
pub struct PageRenderer {
    registry: WidgetRegistry,
}

impl PageRenderer {
    /// A renderer over the given registry.
    pub fn new(registry: WidgetRegistry) -> Self {
        Self { registry }
    }

    /// A renderer with the built-in widgets.
    pub fn with_builtins() -> Self {
        Self::new(WidgetRegistry::with_builtins())
    }

    /// The registry, for registering project widgets.
    pub fn registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.registry
    }

    /// Render a whole page at `breakpoint`.
    pub fn render(&self, content: &PageContent, breakpoint: Breakpoint) -> Markup {
        Element::new("div")
            .class("page")
            .children(
                content
                    .sections
                    .iter()
                    .filter_map(|section| self.render_section(section, breakpoint)),
            )
            .into()
    }

    fn render_section(&self, section: &Section, breakpoint: Breakpoint) -> Option<Markup> {
        if section.settings.hidden_at(breakpoint) {
            return None;
        }
        let merged = section.settings.merged_at(breakpoint);
        let stacked = should_stack(Some(&section.settings), breakpoint);
        let columns = Element::new("div")
            .class("section__columns")
            .class_if(stacked, "section__columns--stacked")
            .children(
                section
                    .columns
                    .iter()
                    .filter_map(|column| self.render_column(column, breakpoint)),
            );
        Some(
            Element::new("section")
                .class("page-section")
                .styles(inline_declarations(&merged))
                .child(columns)
                .into(),
        )
    }

    fn render_column(&self, column: &Column, breakpoint: Breakpoint) -> Option<Markup> {
        if column.settings.hidden_at(breakpoint) {
            return None;
        }
        let merged = column.settings.merged_at(breakpoint);
        Some(
            Element::new("div")
                .class("page-column")
                .styles(inline_declarations(&merged))
                .children(column.widgets.iter().filter_map(|node| {
                    match self.registry.render(node, breakpoint) {
                        RenderOutcome::Rendered(markup) => Some(markup),
                        RenderOutcome::Hidden | RenderOutcome::Unsupported(_) => None,
                    }
                }))
                .into(),
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================
