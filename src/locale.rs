//! Localized value resolution.
//!
//! CMS fields may be plain values or language-keyed maps
//! (`{"en": "Hello", "de": "Hallo"}`). The fallback chain is: exact
//! language → default language → first available value. Entries set to
//! `null` are not "available" and fall through.

use serde_json::Value;

// ---------------------------------------------------------------------------
// resolve_localized
// ---------------------------------------------------------------------------

/// Resolve a possibly language-keyed value.
///
/// Plain (non-object) values pass through untouched. For objects, the
/// requested language wins, then the default language, then the first
/// non-null entry. Returns `None` when nothing usable remains.
pub fn resolve_localized<'a>(
    value: &'a Value,
    lang: &str,
    default_lang: &str,
) -> Option<&'a Value> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return None,
        other => return Some(other),
    };
    map.get(lang)
        .filter(|v| !v.is_null())
        .or_else(|| map.get(default_lang).filter(|v| !v.is_null()))
        .or_else(|| map.values().find(|v| !v.is_null()))
}

/// [`resolve_localized`], rendered to a plain string.
///
/// Strings pass through; numbers and booleans are formatted. Structured
/// values (arrays, nested objects) yield `None` — they have no string form
/// a URL or label could use.
pub fn resolve_localized_str(value: &Value, lang: &str, default_lang: &str) -> Option<String> {
    match resolve_localized(value, lang, default_lang)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
