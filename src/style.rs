//! Settings → inline CSS declarations.
//!
//! Maps the known visual keys of an already-merged settings object to CSS
//! property/value pairs. The input must be pre-merged for the active
//! breakpoint ([`Settings::merged_at`]); this layer emits no media queries,
//! only effective values. Unknown keys and wrong types are skipped,
//! matching the tolerance rules of the settings bag.

use serde_json::Value;

use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Property table
// ---------------------------------------------------------------------------

/// Settings keys mapped 1:1 to a CSS color/string property.
const STRING_PROPS: &[(&str, &str)] = &[
    ("backgroundColor", "background-color"),
    ("textColor", "color"),
    ("textAlign", "text-align"),
    ("fontFamily", "font-family"),
    ("fontWeight", "font-weight"),
    ("borderColor", "border-color"),
];

/// Settings keys mapped to a CSS length property; bare numbers are pixels,
/// strings pass through (`"2rem"`, `"50%"`).
const LENGTH_PROPS: &[(&str, &str)] = &[
    ("fontSize", "font-size"),
    ("lineHeight", "line-height"),
    ("padding", "padding"),
    ("paddingTop", "padding-top"),
    ("paddingRight", "padding-right"),
    ("paddingBottom", "padding-bottom"),
    ("paddingLeft", "padding-left"),
    ("margin", "margin"),
    ("marginTop", "margin-top"),
    ("marginRight", "margin-right"),
    ("marginBottom", "margin-bottom"),
    ("marginLeft", "margin-left"),
    ("gap", "gap"),
    ("borderRadius", "border-radius"),
    ("borderWidth", "border-width"),
    ("maxWidth", "max-width"),
    ("minHeight", "min-height"),
];

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// All inline declarations for a merged settings object, in a stable order.
pub fn inline_declarations(settings: &Settings) -> Vec<(String, String)> {
    let mut declarations = Vec::new();

    for (key, property) in STRING_PROPS {
        if let Some(value) = settings.get(key).and_then(Value::as_str) {
            declarations.push(((*property).to_owned(), value.to_owned()));
        }
    }

    for (key, property) in LENGTH_PROPS {
        if let Some(value) = settings.get(key).and_then(css_length) {
            declarations.push(((*property).to_owned(), value));
        }
    }

    if let Some(value) = settings.get("backgroundImage").and_then(Value::as_str) {
        declarations.push(("background-image".to_owned(), format!("url({value})")));
    }

    if let Some(value) = settings.get("backgroundGradient").and_then(gradient_css) {
        declarations.push(("background-image".to_owned(), value));
    }

    declarations
}

/// The `style` attribute value, or `None` when nothing maps.
pub fn inline_style(settings: &Settings) -> Option<String> {
    let declarations = inline_declarations(settings);
    if declarations.is_empty() {
        return None;
    }
    let css: Vec<String> = declarations
        .into_iter()
        .map(|(property, value)| format!("{property}:{value}"))
        .collect();
    Some(css.join(";"))
}

/// A CSS length: bare numbers are pixels, strings pass through.
fn css_length(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{n}px")),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// A gradient descriptor:
/// `{ "angle": 45, "stops": [{ "color": "#fff", "position": 0 }, ...] }`.
/// At least two stops are required.
fn gradient_css(value: &Value) -> Option<String> {
    let descriptor = value.as_object()?;
    let angle = descriptor.get("angle").and_then(Value::as_f64).unwrap_or(180.0);
    let stops = descriptor.get("stops")?.as_array()?;
    if stops.len() < 2 {
        return None;
    }
    let mut parts = Vec::with_capacity(stops.len());
    for stop in stops {
        let stop = stop.as_object()?;
        let color = stop.get("color")?.as_str()?;
        match stop.get("position").and_then(Value::as_f64) {
            Some(position) => parts.push(format!("{color} {position}%")),
            None => parts.push(color.to_owned()),
        }
    }
    Some(format!("linear-gradient({angle}deg, {})", parts.join(", ")))
}

// ===========================================================================
// Tests
// ===========================================================================
