//! REST client for the CMS delivery API.
//!
//! Thin and typed: one method per endpoint, JSON in, payload structs out.
//! The client implements [`RouteSource`](crate::routes::RouteSource) so a
//! [`RouteResolver`](crate::routes::RouteResolver) can load straight from
//! it.

pub mod client;
pub mod payload;

pub use client::{ApiClient, ApiConfig, ApiError};
pub use payload::{CollectionEntriesPayload, MenuItem, MenuPayload, PagePayload};
