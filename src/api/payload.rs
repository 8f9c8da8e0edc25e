//! Payload shapes of the delivery API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::PageContent;
use crate::routes::CollectionEntry;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// One published page: identity, localized title, and the content tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Plain string or language-keyed map; resolve with
    /// [`resolve_localized`](crate::locale::resolve_localized).
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub content: PageContent,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// A page of collection entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntriesPayload {
    #[serde(default)]
    pub entries: Vec<CollectionEntry>,
    #[serde(default)]
    pub total: Option<u64>,
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

/// A navigation menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuPayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// One menu item. Either a raw `url` or a `page_code` to run through
/// [`RouteResolver::build_url`](crate::routes::RouteResolver::build_url).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Plain string or language-keyed map.
    #[serde(default)]
    pub label: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub page_code: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

// ===========================================================================
// Tests
// ===========================================================================
