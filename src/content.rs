//! Page content model: sections → columns → widgets.
//!
//! The shape of the "page content" payload. Every node carries a
//! [`Settings`] bag; widget nodes additionally carry a type tag and an
//! opaque data value for the widget itself to interpret.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// A full page: an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A horizontal band of the page holding columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// One column of widgets inside a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub widgets: Vec<WidgetNode>,
}

/// One authored widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetNode {
    /// The registry type tag (`"text"`, `"image"`, ...).
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default)]
    pub settings: Settings,
    /// Widget-specific payload (e.g. resolved collection entries for a
    /// listing widget). `Null` when the widget needs none.
    #[serde(default)]
    pub data: Value,
}

impl WidgetNode {
    /// A widget node with empty settings and no data.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            settings: Settings::new(),
            data: Value::Null,
        }
    }

    /// Replace the settings (builder).
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the data payload (builder).
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
