//! The route table: declared routes, matching, and URL building.
//!
//! Built once from the project's routes payload and immutable afterwards.
//! Matching order is homepage → static pages → dynamic patterns in
//! declaration order, first hit wins. Overlapping patterns are a
//! configuration hazard: the build pass warns about exact overlaps but
//! never reorders or rejects — declaration order is the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::locale::resolve_localized_str;
use crate::routes::pattern::{extract_params, PathPattern};

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The project "routes" payload, as served by the REST collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutesPayload {
    #[serde(default)]
    pub homepage: Option<HomepageRoute>,
    #[serde(default)]
    pub pages: Vec<PageRoute>,
    #[serde(default)]
    pub collections: Vec<CollectionRoute>,
}

/// The designated homepage entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomepageRoute {
    pub code: String,
    pub url: String,
    #[serde(default)]
    pub page_uuid: Option<String>,
}

/// One declared page route: static (`url`, no pattern) or dynamic
/// (`pattern` with `{name}` placeholders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRoute {
    pub code: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub page_uuid: Option<String>,
}

impl PageRoute {
    /// Whether this is a static route (no pattern).
    pub fn is_static(&self) -> bool {
        self.pattern.is_none()
    }
}

/// A collection's entry URL declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRoute {
    pub code: String,
    pub entry_url_pattern: String,
    /// Entry field the `{slug}` placeholder reads. Defaults to `slug`.
    #[serde(default)]
    pub entry_url_field: Option<String>,
}

/// A collection entry, as needed for URL building: an identifier plus the
/// entry's field map (values may be language-keyed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// ResolvedRoute
// ---------------------------------------------------------------------------

/// The outcome of matching a path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    /// The matched entry's code.
    pub code: String,
    /// The matched entry's page identifier, when declared.
    pub page_id: Option<String>,
    /// Captured parameters, percent-decoded. Empty for homepage/static hits.
    pub params: BTreeMap<String, String>,
    /// Whether the homepage matched.
    pub is_homepage: bool,
}

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

/// Immutable, pre-compiled route table.
pub struct RouteTable {
    homepage: Option<HomepageRoute>,
    pages: Vec<PageRoute>,
    /// Compiled rule per page, parallel to `pages`. `None` for static
    /// routes and for patterns that failed to compile (warned, unmatchable).
    compiled: Vec<Option<PathPattern>>,
    collections: Vec<CollectionRoute>,
    /// Compiled entry URL pattern per collection, parallel to `collections`.
    entry_patterns: Vec<Option<PathPattern>>,
}

impl RouteTable {
    /// Build a table from the routes payload, compiling every pattern.
    ///
    /// Uncompilable patterns are warned about and left unmatchable; the
    /// build itself never fails. Duplicate static URLs and exactly
    /// overlapping patterns are flagged the same way.
    pub fn build(payload: RoutesPayload) -> Self {
        let compiled: Vec<Option<PathPattern>> = payload
            .pages
            .iter()
            .map(|page| {
                let pattern = page.pattern.as_deref()?;
                // Flags duplicate {name} tokens as it scans.
                let _ = extract_params(pattern);
                match PathPattern::compile(pattern) {
                    Ok(compiled) => Some(compiled),
                    Err(err) => {
                        warn!(code = %page.code, error = %err, "unusable route pattern");
                        None
                    }
                }
            })
            .collect();

        let entry_patterns: Vec<Option<PathPattern>> = payload
            .collections
            .iter()
            .map(|collection| match PathPattern::compile(&collection.entry_url_pattern) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    warn!(code = %collection.code, error = %err, "unusable entry url pattern");
                    None
                }
            })
            .collect();

        let table = Self {
            homepage: payload.homepage,
            pages: payload.pages,
            compiled,
            collections: payload.collections,
            entry_patterns,
        };
        table.flag_overlaps();
        table
    }

    /// Non-fatal configuration scan: duplicate static URLs and dynamic
    /// patterns with identical skeletons both silently shadow later
    /// entries, which is worth a warning even though first-match-wins is
    /// the defined behavior.
    fn flag_overlaps(&self) {
        for (i, page) in self.pages.iter().enumerate() {
            if let (true, Some(url)) = (page.is_static(), page.url.as_deref()) {
                let shadowed = self.pages[..i]
                    .iter()
                    .any(|p| p.is_static() && p.url.as_deref() == Some(url));
                if shadowed {
                    warn!(code = %page.code, url, "duplicate static url is shadowed");
                }
            }
            if let Some(rule) = &self.compiled[i] {
                let shadowed = self.compiled[..i]
                    .iter()
                    .flatten()
                    .any(|p| p.skeleton() == rule.skeleton());
                if shadowed {
                    warn!(code = %page.code, pattern = %rule.raw(), "overlapping pattern is shadowed");
                }
            }
        }
    }

    /// The designated homepage, if any.
    pub fn homepage(&self) -> Option<&HomepageRoute> {
        self.homepage.as_ref()
    }

    /// Declared page routes, in table order.
    pub fn pages(&self) -> &[PageRoute] {
        &self.pages
    }

    /// Look up a page route by code.
    pub fn page(&self, code: &str) -> Option<&PageRoute> {
        self.pages.iter().find(|page| page.code == code)
    }

    /// Look up a collection route by code.
    pub fn collection(&self, code: &str) -> Option<&CollectionRoute> {
        self.collections.iter().find(|c| c.code == code)
    }

    /// Match a request path. First hit wins; `None` means not found.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = normalize(path);
        let path: &str = path.as_ref();

        // 1. Homepage.
        if let Some(home) = &self.homepage {
            if path == "/" || path == home.url {
                return Some(ResolvedRoute {
                    code: home.code.clone(),
                    page_id: home.page_uuid.clone(),
                    params: BTreeMap::new(),
                    is_homepage: true,
                });
            }
        }

        // 2. Static pages, exact url equality.
        for page in self.pages.iter().filter(|p| p.is_static()) {
            if page.url.as_deref() == Some(path) {
                return Some(ResolvedRoute {
                    code: page.code.clone(),
                    page_id: page.page_uuid.clone(),
                    params: BTreeMap::new(),
                    is_homepage: false,
                });
            }
        }

        // 3. Dynamic patterns, declaration order.
        for (page, rule) in self.pages.iter().zip(&self.compiled) {
            let Some(rule) = rule else { continue };
            if let Some(params) = rule.match_path(&path) {
                return Some(ResolvedRoute {
                    code: page.code.clone(),
                    page_id: page.page_uuid.clone(),
                    params,
                    is_homepage: false,
                });
            }
        }

        None
    }

    /// Build the URL for a page code.
    ///
    /// The homepage code yields `/`. Static routes return their declared
    /// url verbatim. Dynamic routes substitute `params`; a missing or
    /// empty parameter yields `None` rather than a malformed URL.
    pub fn build_url(&self, code: &str, params: &BTreeMap<String, String>) -> Option<String> {
        if let Some(home) = &self.homepage {
            if home.code == code {
                return Some("/".to_owned());
            }
        }
        let index = self.pages.iter().position(|page| page.code == code)?;
        let page = &self.pages[index];
        match &self.compiled[index] {
            None => match &page.url {
                Some(url) => Some(url.clone()),
                None => {
                    warn!(code, "static route has no url");
                    None
                }
            },
            Some(rule) => rule.expand(params),
        }
    }

    /// Build the URL for a collection entry.
    ///
    /// Placeholder names are special-cased: `lang` is the passed language,
    /// `slug` is the collection's configured entry field, `entry_id` is the
    /// entry identifier; any other name reads the entry field of the same
    /// name. Field values that are language-keyed maps go through the
    /// localized fallback chain. `None` when any placeholder stays
    /// unresolved.
    pub fn build_entry_url(
        &self,
        collection_code: &str,
        entry: &CollectionEntry,
        lang: &str,
        default_lang: &str,
    ) -> Option<String> {
        let index = self
            .collections
            .iter()
            .position(|c| c.code == collection_code)?;
        let collection = &self.collections[index];
        let rule = self.entry_patterns[index].as_ref()?;

        let slug_field = collection.entry_url_field.as_deref().unwrap_or("slug");
        let mut params = BTreeMap::new();
        for name in rule.params() {
            let value = match name {
                "lang" => Some(lang.to_owned()),
                "entry_id" => Some(entry.id.clone()),
                "slug" => entry_field(entry, slug_field, lang, default_lang),
                other => entry_field(entry, other, lang, default_lang),
            };
            match value {
                Some(value) => {
                    params.insert(name.to_owned(), value);
                }
                None => {
                    warn!(
                        collection = collection_code,
                        param = name,
                        "unresolvable entry url parameter"
                    );
                    return None;
                }
            }
        }
        rule.expand(&params)
    }
}

/// Read an entry field as a string, applying the localized fallback chain
/// when the value is language-keyed.
fn entry_field(
    entry: &CollectionEntry,
    field: &str,
    lang: &str,
    default_lang: &str,
) -> Option<String> {
    resolve_localized_str(entry.data.get(field)?, lang, default_lang)
}

/// Paths always start with `/`.
fn normalize(path: &str) -> std::borrow::Cow<'_, str> {
    if path.starts_with('/') {
        std::borrow::Cow::Borrowed(path)
    } else {
        std::borrow::Cow::Owned(format!("/{path}"))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
