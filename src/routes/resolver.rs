//! RouteResolver: load-once state machine over a route source.
//!
//! `load()` fetches the route table exactly once per resolver; concurrent
//! callers await the same in-flight fetch, and a failed attempt records an
//! error state that a later `load()` call may retry out of. The resolve and
//! build operations are synchronous and side-effect free; called before
//! the table is loaded they log a warning and report "no match" instead of
//! raising.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tokio::sync::OnceCell;
use tracing::warn;

use crate::routes::table::{CollectionEntry, ResolvedRoute, RouteTable, RoutesPayload};

// ---------------------------------------------------------------------------
// RouteSource
// ---------------------------------------------------------------------------

/// Where the routes payload comes from. Implemented by the REST client;
/// tests implement it over canned payloads.
pub trait RouteSource: Send + Sync {
    /// Fetch the project's routes payload.
    fn fetch_routes(
        &self,
    ) -> impl std::future::Future<
        Output = Result<RoutesPayload, Box<dyn std::error::Error + Send + Sync>>,
    > + Send;
}

// ---------------------------------------------------------------------------
// Errors & status
// ---------------------------------------------------------------------------

/// Route table loading failure.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("route table fetch failed: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lifecycle of the resolver's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Unloaded,
    Loading,
    Loaded,
    Error,
}

// ---------------------------------------------------------------------------
// RouteResolver
// ---------------------------------------------------------------------------

/// Route resolution service bound to one source.
///
/// The table is loaded lazily and treated as immutable afterwards; a fresh
/// table requires a fresh resolver.
pub struct RouteResolver<S> {
    source: S,
    table: OnceCell<RouteTable>,
    status: Mutex<LoadStatus>,
    last_error: Mutex<Option<String>>,
    language: String,
    default_language: String,
}

impl<S: RouteSource> RouteResolver<S> {
    /// Create a resolver over `source`. Language defaults to `en`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            table: OnceCell::new(),
            status: Mutex::new(LoadStatus::Unloaded),
            last_error: Mutex::new(None),
            language: "en".to_owned(),
            default_language: "en".to_owned(),
        }
    }

    /// Set the active language for entry URL building (builder).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the fallback language for localized fields (builder).
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Load the route table. Idempotent: once loaded this is a no-op, and
    /// concurrent callers share one in-flight fetch. On failure the error
    /// is recorded and returned; calling `load()` again retries.
    pub async fn load(&self) -> Result<(), RouteError> {
        if self.table.get().is_some() {
            return Ok(());
        }
        self.set_status(LoadStatus::Loading);
        let result = self
            .table
            .get_or_try_init(|| async {
                let payload = self.source.fetch_routes().await.map_err(RouteError::Fetch)?;
                Ok::<_, RouteError>(RouteTable::build(payload))
            })
            .await;
        match result {
            Ok(_) => {
                self.set_status(LoadStatus::Loaded);
                *self.last_error.lock().expect("error lock") = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "route table load failed");
                self.set_status(LoadStatus::Error);
                *self.last_error.lock().expect("error lock") = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> LoadStatus {
        *self.status.lock().expect("status lock")
    }

    /// Message of the most recent load failure, cleared on success.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().expect("error lock").clone()
    }

    /// The loaded table, if any.
    pub fn table(&self) -> Option<&RouteTable> {
        self.table.get()
    }

    /// Match a request path. `None` both for "not found" and — with a
    /// warning — for "table not loaded yet".
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        self.ready("resolve")?.resolve(path)
    }

    /// Build the URL for a page code.
    pub fn build_url(&self, code: &str, params: &BTreeMap<String, String>) -> Option<String> {
        self.ready("build_url")?.build_url(code, params)
    }

    /// Build the URL for a collection entry in the resolver's language.
    pub fn build_entry_url(
        &self,
        collection_code: &str,
        entry: &CollectionEntry,
    ) -> Option<String> {
        self.build_entry_url_in(collection_code, entry, &self.language)
    }

    /// Build the URL for a collection entry in an explicit language.
    pub fn build_entry_url_in(
        &self,
        collection_code: &str,
        entry: &CollectionEntry,
        lang: &str,
    ) -> Option<String> {
        self.ready("build_entry_url")?
            .build_entry_url(collection_code, entry, lang, &self.default_language)
    }

    fn ready(&self, operation: &str) -> Option<&RouteTable> {
        let table = self.table.get();
        if table.is_none() {
            warn!(operation, "route table not loaded yet");
        }
        table
    }

    fn set_status(&self, status: LoadStatus) {
        *self.status.lock().expect("status lock") = status;
    }
}

// ===========================================================================
// Tests
// ===========================================================================
