//! Breakpoint-aware settings resolution.
//!
//! Resolution rules, per breakpoint:
//!
//! - **Values** — tablet/mobile read their override first and fall back to
//!   the top level (desktop). They never fall back to each other.
//! - **Merged view** — desktop returns the settings unchanged; tablet/mobile
//!   return a shallow key-by-key merge with the override winning.
//! - **Hidden** — per breakpoint with *no* fallback: an element hidden on
//!   desktop is still visible on mobile unless `responsive.mobile.hidden`
//!   says otherwise.
//! - **Stacking** — desktop never stacks; tablet stacks when
//!   `stackOnTablet` is true (default false); mobile stacks unless
//!   `stackOnMobile` is false (default true).

use serde_json::Value;

use crate::breakpoint::Breakpoint;
use crate::settings::model::{
    Settings, HIDDEN_KEY, STACK_ON_MOBILE_KEY, STACK_ON_TABLET_KEY,
};
use crate::viewport::ViewportObserver;

// ---------------------------------------------------------------------------
// Per-breakpoint resolution on Settings
// ---------------------------------------------------------------------------

impl Settings {
    /// Effective value of `key` at `breakpoint`.
    ///
    /// Override presence is what counts: an override entry set to `null`
    /// still wins over the desktop value, matching the authored JSON.
    pub fn value_at(&self, breakpoint: Breakpoint, key: &str) -> Option<&Value> {
        if let Some(over) = self.override_for(breakpoint) {
            if let Some(value) = over.get(key) {
                return Some(value);
            }
        }
        self.get(key)
    }

    /// Effective value of `key` at `breakpoint`, with a default.
    pub fn value_at_or<'a>(
        &'a self,
        breakpoint: Breakpoint,
        key: &str,
        default: &'a Value,
    ) -> &'a Value {
        self.value_at(breakpoint, key).unwrap_or(default)
    }

    /// Effective string value of `key` at `breakpoint`.
    pub fn str_at(&self, breakpoint: Breakpoint, key: &str) -> Option<&str> {
        self.value_at(breakpoint, key)?.as_str()
    }

    /// Effective boolean value of `key` at `breakpoint`.
    pub fn bool_at(&self, breakpoint: Breakpoint, key: &str) -> Option<bool> {
        self.value_at(breakpoint, key)?.as_bool()
    }

    /// Effective numeric value of `key` at `breakpoint`.
    pub fn f64_at(&self, breakpoint: Breakpoint, key: &str) -> Option<f64> {
        self.value_at(breakpoint, key)?.as_f64()
    }

    /// The merged view of these settings at `breakpoint`.
    ///
    /// Desktop returns a clone of the settings unchanged. Tablet/mobile
    /// return the literal shallow merge `{...settings, ...override}`: keys
    /// present in the override replace desktop values, keys absent keep
    /// them. The `responsive` sub-mapping rides along in the result and is
    /// inert there.
    pub fn merged_at(&self, breakpoint: Breakpoint) -> Settings {
        let Some(over) = self.override_for(breakpoint) else {
            return self.clone();
        };
        let mut merged = self.as_map().clone();
        for (key, value) in over {
            merged.insert(key.clone(), value.clone());
        }
        Settings::from_map(merged)
    }

    /// Whether the element is hidden at `breakpoint`.
    ///
    /// Desktop reads the top-level `hidden` flag; tablet/mobile read only
    /// their override's `hidden` flag, defaulting to visible.
    pub fn hidden_at(&self, breakpoint: Breakpoint) -> bool {
        let flag = match breakpoint.override_key() {
            None => self.get(HIDDEN_KEY),
            Some(_) => self.override_for(breakpoint).and_then(|o| o.get(HIDDEN_KEY)),
        };
        flag.and_then(Value::as_bool).unwrap_or(false)
    }

    /// Whether a multi-column layout stacks to one column at `breakpoint`.
    pub fn stack_at(&self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Desktop => false,
            Breakpoint::Tablet => self
                .get(STACK_ON_TABLET_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            Breakpoint::Mobile => self
                .get(STACK_ON_MOBILE_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(true),
        }
    }
}

/// Stacking for a possibly absent settings object.
///
/// Absent settings stack on mobile only.
pub fn should_stack(settings: Option<&Settings>, breakpoint: Breakpoint) -> bool {
    match settings {
        Some(s) => s.stack_at(breakpoint),
        None => breakpoint == Breakpoint::Mobile,
    }
}

// ---------------------------------------------------------------------------
// SettingsResolver
// ---------------------------------------------------------------------------

/// Settings resolution against the ambient breakpoint.
///
/// Thin wrapper binding the per-breakpoint operations on [`Settings`] to a
/// [`ViewportObserver`], so render code asks one collaborator instead of
/// threading a breakpoint through every call.
#[derive(Clone)]
pub struct SettingsResolver {
    observer: ViewportObserver,
}

impl SettingsResolver {
    /// Create a resolver reading the breakpoint from `observer`.
    pub fn new(observer: ViewportObserver) -> Self {
        Self { observer }
    }

    /// The live breakpoint.
    pub fn breakpoint(&self) -> Breakpoint {
        self.observer.current()
    }

    /// Effective value of `key` at the live breakpoint.
    pub fn value<'a>(&self, settings: &'a Settings, key: &str) -> Option<&'a Value> {
        settings.value_at(self.breakpoint(), key)
    }

    /// Effective value with a default.
    pub fn value_or<'a>(
        &self,
        settings: &'a Settings,
        key: &str,
        default: &'a Value,
    ) -> &'a Value {
        settings.value_at_or(self.breakpoint(), key, default)
    }

    /// Merged view at the live breakpoint.
    pub fn merged(&self, settings: &Settings) -> Settings {
        settings.merged_at(self.breakpoint())
    }

    /// Hidden flag at the live breakpoint.
    pub fn is_hidden(&self, settings: &Settings) -> bool {
        settings.hidden_at(self.breakpoint())
    }

    /// Column stacking at the live breakpoint.
    pub fn should_stack(&self, settings: Option<&Settings>) -> bool {
        should_stack(settings, self.breakpoint())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::FixedViewport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Settings {
        Settings::from_value(json!({
            "backgroundColor": "#fff",
            "padding": 24,
            "hidden": false,
            "responsive": {
                "tablet": { "padding": 16 },
                "mobile": { "padding": 8, "hidden": true }
            }
        }))
    }

    // ── value_at ─────────────────────────────────────────────────────

    #[test]
    fn desktop_reads_top_level() {
        let s = sample();
        assert_eq!(s.value_at(Breakpoint::Desktop, "padding"), Some(&json!(24)));
    }

    #[test]
    fn override_wins_on_its_breakpoint() {
        let s = sample();
        assert_eq!(s.value_at(Breakpoint::Tablet, "padding"), Some(&json!(16)));
        assert_eq!(s.value_at(Breakpoint::Mobile, "padding"), Some(&json!(8)));
    }

    #[test]
    fn missing_override_key_falls_back_to_desktop() {
        let s = sample();
        assert_eq!(
            s.value_at(Breakpoint::Tablet, "backgroundColor"),
            Some(&json!("#fff"))
        );
    }

    #[test]
    fn breakpoints_never_fall_back_to_each_other() {
        let s = Settings::from_value(json!({
            "responsive": { "tablet": { "width": 300 } }
        }));
        // Mobile must not see the tablet override.
        assert_eq!(s.value_at(Breakpoint::Mobile, "width"), None);
    }

    #[test]
    fn null_override_wins_over_desktop() {
        let s = Settings::from_value(json!({
            "caption": "hello",
            "responsive": { "mobile": { "caption": null } }
        }));
        assert_eq!(s.value_at(Breakpoint::Mobile, "caption"), Some(&json!(null)));
        // Typed accessor reads a null as absent.
        assert_eq!(s.str_at(Breakpoint::Mobile, "caption"), None);
    }

    #[test]
    fn value_at_or_default() {
        let s = sample();
        let fallback = json!("center");
        assert_eq!(
            s.value_at_or(Breakpoint::Desktop, "textAlign", &fallback),
            &json!("center")
        );
        assert_eq!(
            s.value_at_or(Breakpoint::Mobile, "padding", &fallback),
            &json!(8)
        );
    }

    #[test]
    fn typed_accessors() {
        let s = sample();
        assert_eq!(s.str_at(Breakpoint::Desktop, "backgroundColor"), Some("#fff"));
        assert_eq!(s.bool_at(Breakpoint::Desktop, "hidden"), Some(false));
        assert_eq!(s.f64_at(Breakpoint::Tablet, "padding"), Some(16.0));
        assert_eq!(s.str_at(Breakpoint::Desktop, "padding"), None);
    }

    // ── merged_at ────────────────────────────────────────────────────

    #[test]
    fn merged_at_desktop_is_unchanged() {
        let s = sample();
        assert_eq!(s.merged_at(Breakpoint::Desktop), s);
    }

    #[test]
    fn merged_at_tablet_shallow_merges() {
        let s = sample();
        let merged = s.merged_at(Breakpoint::Tablet);
        assert_eq!(merged.get("padding"), Some(&json!(16)));
        assert_eq!(merged.get("backgroundColor"), Some(&json!("#fff")));
        // The responsive sub-mapping rides along.
        assert!(merged.contains("responsive"));
    }

    #[test]
    fn merged_matches_spread_semantics() {
        // merged == {...s, ...(s.responsive?.[b] ?? {})}
        let s = sample();
        for bp in [Breakpoint::Tablet, Breakpoint::Mobile] {
            let mut expected = s.as_map().clone();
            for (k, v) in s.override_for(bp).unwrap() {
                expected.insert(k.clone(), v.clone());
            }
            assert_eq!(s.merged_at(bp), Settings::from_map(expected));
        }
    }

    #[test]
    fn merged_without_override_clones() {
        let s = Settings::new().with("a", 1);
        assert_eq!(s.merged_at(Breakpoint::Mobile), s);
    }

    // ── hidden_at ────────────────────────────────────────────────────

    #[test]
    fn hidden_desktop_reads_only_top_level() {
        let s = sample();
        assert!(!s.hidden_at(Breakpoint::Desktop));

        let s = Settings::new().with("hidden", true);
        assert!(s.hidden_at(Breakpoint::Desktop));
    }

    #[test]
    fn hidden_mobile_ignores_desktop_flag() {
        // Hidden on desktop, no mobile override: visible on mobile.
        let s = Settings::from_value(json!({ "hidden": true }));
        assert!(!s.hidden_at(Breakpoint::Mobile));
        assert!(!s.hidden_at(Breakpoint::Tablet));
    }

    #[test]
    fn hidden_mobile_reads_only_its_override() {
        let s = sample();
        assert!(s.hidden_at(Breakpoint::Mobile));
        assert!(!s.hidden_at(Breakpoint::Tablet));
    }

    #[test]
    fn mobile_override_does_not_affect_desktop() {
        let s = Settings::from_value(json!({
            "responsive": { "mobile": { "hidden": true } }
        }));
        assert!(!s.hidden_at(Breakpoint::Desktop));
        assert!(s.hidden_at(Breakpoint::Mobile));
    }

    #[test]
    fn hidden_wrong_type_reads_visible() {
        let s = Settings::from_value(json!({ "hidden": "yes" }));
        assert!(!s.hidden_at(Breakpoint::Desktop));
    }

    // ── Stacking ─────────────────────────────────────────────────────

    #[test]
    fn absent_settings_stack_on_mobile_only() {
        assert!(!should_stack(None, Breakpoint::Desktop));
        assert!(!should_stack(None, Breakpoint::Tablet));
        assert!(should_stack(None, Breakpoint::Mobile));
    }

    #[test]
    fn desktop_never_stacks() {
        let s = Settings::new().with("stackOnTablet", true).with("stackOnMobile", true);
        assert!(!s.stack_at(Breakpoint::Desktop));
    }

    #[test]
    fn tablet_stacking_defaults_off() {
        assert!(!Settings::new().stack_at(Breakpoint::Tablet));
        let s = Settings::new().with("stackOnTablet", true);
        assert!(s.stack_at(Breakpoint::Tablet));
    }

    #[test]
    fn mobile_stacking_defaults_on() {
        assert!(Settings::new().stack_at(Breakpoint::Mobile));
        let s = Settings::new().with("stackOnMobile", false);
        assert!(!s.stack_at(Breakpoint::Mobile));
    }

    // ── SettingsResolver ─────────────────────────────────────────────

    fn resolver(width: u32) -> (SettingsResolver, FixedViewport) {
        let viewport = FixedViewport::new(Some(width));
        let observer = ViewportObserver::new(viewport.clone());
        (SettingsResolver::new(observer), viewport)
    }

    #[test]
    fn resolver_follows_live_breakpoint() {
        let (resolver, viewport) = resolver(1440);
        let s = sample();

        assert_eq!(resolver.breakpoint(), Breakpoint::Desktop);
        assert_eq!(resolver.value(&s, "padding"), Some(&json!(24)));
        assert!(!resolver.is_hidden(&s));

        viewport.set_width(Some(375));
        assert_eq!(resolver.breakpoint(), Breakpoint::Mobile);
        assert_eq!(resolver.value(&s, "padding"), Some(&json!(8)));
        assert!(resolver.is_hidden(&s));
    }

    #[test]
    fn resolver_merged_and_stacking() {
        let (resolver, viewport) = resolver(900);
        let s = sample();

        assert_eq!(resolver.merged(&s).get("padding"), Some(&json!(16)));
        assert!(!resolver.should_stack(Some(&s)));
        assert!(!resolver.should_stack(None));

        viewport.set_width(Some(375));
        assert!(resolver.should_stack(None));
    }

    #[test]
    fn resolver_value_or() {
        let (resolver, _viewport) = resolver(1440);
        let s = Settings::new();
        let fallback = json!(10);
        assert_eq!(resolver.value_or(&s, "gap", &fallback), &json!(10));
    }
}
