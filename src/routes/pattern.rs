//! logos-based URL pattern lexing and compiled matching rules.
//!
//! A pattern is literal text interleaved with `{name}` placeholders
//! (`/blog/{slug}`). Compilation escapes the literal portions, turns each
//! placeholder into a `([^/]+)` capture, and anchors both ends, so a
//! placeholder never swallows a `/`. Stray braces that form no valid
//! placeholder are tolerated as literal text — malformed configuration is
//! flagged, not rejected.

use std::collections::BTreeMap;

use logos::Logos;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use tracing::warn;

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Characters percent-encoded when substituting a parameter into a path
/// segment. Everything a segment cannot legally carry raw.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Lexer over a pattern string.
#[derive(Logos, Debug, Clone, PartialEq)]
enum PatternToken {
    /// `{name}` placeholder.
    #[regex(r"\{[A-Za-z_][A-Za-z0-9_]*\}")]
    Param,

    /// A run of literal text (anything but braces).
    #[regex(r"[^{}]+")]
    Literal,
}

/// One lexed segment of a pattern.
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Lex a pattern into segments. Lex errors (stray braces) become literals.
fn segments(pattern: &str) -> Vec<Segment> {
    PatternToken::lexer(pattern)
        .spanned()
        .map(|(token, span)| {
            let slice = &pattern[span];
            match token {
                Ok(PatternToken::Param) => {
                    Segment::Param(slice[1..slice.len() - 1].to_owned())
                }
                Ok(PatternToken::Literal) | Err(()) => Segment::Literal(slice.to_owned()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// extract_params
// ---------------------------------------------------------------------------

/// Parameter names of a pattern, left to right.
///
/// Duplicate names are preserved positionally — a duplicate makes capture
/// ambiguous, so it is flagged as a configuration error rather than
/// silently deduplicated.
pub fn extract_params(pattern: &str) -> Vec<String> {
    let names: Vec<String> = segments(pattern)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Param(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            warn!(pattern, param = %name, "duplicate parameter in pattern");
        }
    }
    names
}

// ---------------------------------------------------------------------------
// PathPattern
// ---------------------------------------------------------------------------

/// Pattern compilation failure.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern `{pattern}` does not compile: {source}")]
    Compile {
        pattern: String,
        source: regex::Error,
    },
}

/// A compiled URL pattern: anchored matching rule plus the segment list for
/// the reverse (substitution) direction.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    rule: Regex,
}

impl PathPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let segments = segments(pattern);
        let mut source = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Param(_) => source.push_str("([^/]+)"),
            }
        }
        source.push('$');
        let rule = Regex::new(&source).map_err(|source| PatternError::Compile {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            raw: pattern.to_owned(),
            segments,
            rule,
        })
    }

    /// The original pattern string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parameter names, left to right, duplicates preserved.
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// The pattern with parameter names erased (`/blog/{slug}` → `/blog/{}`).
    ///
    /// Two patterns with the same skeleton match exactly the same paths.
    pub fn skeleton(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Param(_) => "{}",
            })
            .collect()
    }

    /// Match a whole path against this pattern.
    ///
    /// Captured values are percent-decoded. With duplicate parameter names,
    /// the last occurrence's capture wins.
    pub fn match_path(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let captures = self.rule.captures(path)?;
        let mut params = BTreeMap::new();
        let names = self.params();
        for (name, capture) in names.iter().zip(captures.iter().skip(1)) {
            let raw = capture?.as_str();
            let decoded = percent_decode_str(raw)
                .decode_utf8()
                .map(|cow| cow.into_owned())
                .unwrap_or_else(|_| raw.to_owned());
            params.insert((*name).to_owned(), decoded);
        }
        Some(params)
    }

    /// Substitute parameters back into the pattern.
    ///
    /// Values are percent-encoded per segment. A missing or empty value
    /// means the URL cannot be formed: logged as a warning, `None` returned.
    pub fn expand(&self, params: &BTreeMap<String, String>) -> Option<String> {
        let mut url = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Param(name) => match params.get(name).filter(|v| !v.is_empty()) {
                    Some(value) => {
                        url.push_str(&utf8_percent_encode(value, SEGMENT).to_string());
                    }
                    None => {
                        warn!(pattern = %self.raw, param = %name, "missing parameter for url");
                        return None;
                    }
                },
            }
        }
        Some(url)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
