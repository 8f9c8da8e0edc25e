//! The settings bag: a dynamic property map with responsive overrides.
//!
//! CMS authors shape these freely, so the representation is a thin wrapper
//! over a JSON object rather than a typed struct. The top level of the map
//! *is* the desktop view; tablet and mobile overrides live under the
//! `responsive` key as partial maps. Malformed shapes are tolerated
//! throughout: a wrong type reads as absent, never as an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::breakpoint::Breakpoint;

/// Key of the per-breakpoint override sub-mapping.
pub const RESPONSIVE_KEY: &str = "responsive";

/// Key of the per-breakpoint hidden flag.
pub const HIDDEN_KEY: &str = "hidden";

/// Key governing tablet column stacking.
pub const STACK_ON_TABLET_KEY: &str = "stackOnTablet";

/// Key governing mobile column stacking.
pub const STACK_ON_MOBILE_KEY: &str = "stackOnMobile";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// A settings object: property name → JSON value, plus optional
/// `responsive.tablet` / `responsive.mobile` partial overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    map: Map<String, Value>,
}

impl Settings {
    /// An empty settings object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Wrap a JSON value. Non-object values yield an empty settings object.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { map },
            _ => Self::default(),
        }
    }

    /// Insert a property (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Insert a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(key.into(), value.into());
    }

    /// Raw top-level property lookup, no breakpoint logic.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Whether the top level carries the property at all.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// The override map for a breakpoint: `responsive.tablet` or
    /// `responsive.mobile`. Desktop has no override slot. A `responsive`
    /// entry that is not an object reads as absent.
    pub fn override_for(&self, breakpoint: Breakpoint) -> Option<&Map<String, Value>> {
        let key = breakpoint.override_key()?;
        self.map.get(RESPONSIVE_KEY)?.as_object()?.get(key)?.as_object()
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate top-level property names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responsive_settings() -> Settings {
        Settings::from_value(json!({
            "backgroundColor": "#fff",
            "padding": 24,
            "responsive": {
                "tablet": { "padding": 16 },
                "mobile": { "padding": 8, "hidden": true }
            }
        }))
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        assert!(Settings::new().is_empty());
    }

    #[test]
    fn from_value_non_object_is_empty() {
        assert!(Settings::from_value(json!("oops")).is_empty());
        assert!(Settings::from_value(json!(null)).is_empty());
        assert!(Settings::from_value(json!([1, 2])).is_empty());
    }

    #[test]
    fn builder_with_inserts() {
        let s = Settings::new().with("hidden", true).with("padding", 12);
        assert_eq!(s.get("hidden"), Some(&json!(true)));
        assert_eq!(s.get("padding"), Some(&json!(12)));
    }

    // ── Raw access ───────────────────────────────────────────────────

    #[test]
    fn get_top_level() {
        let s = responsive_settings();
        assert_eq!(s.get("backgroundColor"), Some(&json!("#fff")));
        assert_eq!(s.get("missing"), None);
    }

    #[test]
    fn contains_distinguishes_null_from_absent() {
        let s = Settings::from_value(json!({ "a": null }));
        assert!(s.contains("a"));
        assert!(!s.contains("b"));
    }

    // ── Overrides ────────────────────────────────────────────────────

    #[test]
    fn override_for_desktop_is_none() {
        let s = responsive_settings();
        assert!(s.override_for(Breakpoint::Desktop).is_none());
    }

    #[test]
    fn override_for_tablet_and_mobile() {
        let s = responsive_settings();
        let tablet = s.override_for(Breakpoint::Tablet).unwrap();
        assert_eq!(tablet.get("padding"), Some(&json!(16)));

        let mobile = s.override_for(Breakpoint::Mobile).unwrap();
        assert_eq!(mobile.get("hidden"), Some(&json!(true)));
    }

    #[test]
    fn override_missing_breakpoint_is_none() {
        let s = Settings::from_value(json!({
            "responsive": { "tablet": { "padding": 1 } }
        }));
        assert!(s.override_for(Breakpoint::Mobile).is_none());
    }

    #[test]
    fn malformed_responsive_tolerated() {
        let s = Settings::from_value(json!({ "responsive": "not-a-map" }));
        assert!(s.override_for(Breakpoint::Tablet).is_none());

        let s = Settings::from_value(json!({ "responsive": { "mobile": 42 } }));
        assert!(s.override_for(Breakpoint::Mobile).is_none());
    }

    // ── Serde ────────────────────────────────────────────────────────

    #[test]
    fn transparent_round_trip() {
        let s = responsive_settings();
        let text = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&text).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserializes_from_plain_object() {
        let s: Settings = serde_json::from_str(r#"{"hidden": false}"#).unwrap();
        assert_eq!(s.get("hidden"), Some(&json!(false)));
    }
}
