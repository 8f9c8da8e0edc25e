//! ApiClient: typed access to the delivery API.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::payload::{CollectionEntriesPayload, MenuPayload, PagePayload};
use crate::routes::{RouteSource, RoutesPayload};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

// ---------------------------------------------------------------------------
// Config & errors
// ---------------------------------------------------------------------------

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the delivery API, e.g. `https://api.example.com/v1/`.
    pub base_url: Url,
    /// API key sent with every request, when the deployment requires one.
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Config for a base URL, no API key.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
        }
    }

    /// Attach an API key (builder).
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Delivery API failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Typed client over the delivery API endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client. The API key, when configured, becomes a default
    /// header on every request.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            if let Ok(value) = HeaderValue::from_str(key) {
                headers.insert(API_KEY_HEADER, value);
            }
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, config })
    }

    /// The project's route declarations.
    pub async fn routes(&self) -> Result<RoutesPayload, ApiError> {
        self.get_json(self.endpoint("routes")?).await
    }

    /// A page by identifier.
    pub async fn page(&self, uuid: &str) -> Result<PagePayload, ApiError> {
        self.get_json(self.endpoint(&format!("pages/{uuid}"))?).await
    }

    /// Entries of a collection.
    pub async fn collection_entries(
        &self,
        code: &str,
    ) -> Result<CollectionEntriesPayload, ApiError> {
        self.get_json(self.endpoint(&format!("collections/{code}/entries"))?)
            .await
    }

    /// A menu by code.
    pub async fn menu(&self, code: &str) -> Result<MenuPayload, ApiError> {
        self.get_json(self.endpoint(&format!("menus/{code}"))?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.config.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "delivery api request");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

impl RouteSource for ApiClient {
    async fn fetch_routes(
        &self,
    ) -> Result<RoutesPayload, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.routes().await?)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
