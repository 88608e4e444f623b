//! The content API client and its shared request plumbing.
//!
//! Operations live in [`crate::entities`], [`crate::taxonomy`] and
//! [`crate::navigation`]; every one of them goes through [`ContentClient::send`]
//! so transport retries and error mapping are handled in one place.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ContentApiConfig;
use crate::error::ContentApiError;

/// Response header carrying the total number of matching entities.
pub(crate) const TOTAL_HEADER: &str = "x-wp-total";
/// Response header carrying the total number of pages.
pub(crate) const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Client for a headless content API.
///
/// Holds only immutable configuration and a pooled HTTP client; cloning is
/// cheap and clones share the connection pool. Construct one per backend and
/// pass it to whatever needs it.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    api_root: Url,
    menu_root: Url,
    max_retries: u32,
}

impl ContentClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configured prefixes do not form valid URLs or the HTTP
    /// client cannot be built.
    pub fn new(config: ContentApiConfig) -> Result<Self, ContentApiError> {
        let api_root = config.api_root()?;
        let menu_root = config.menu_root()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ContentApiError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            http,
            api_root,
            menu_root,
            max_retries: config.max_retries,
        })
    }

    /// Create a client from `FOLIO_*` environment variables.
    ///
    /// A missing `FOLIO_API_URL` is the one fatal condition of the content
    /// layer and is reported as [`ContentApiError::Config`].
    pub fn from_env() -> Result<Self, ContentApiError> {
        Self::new(ContentApiConfig::from_env()?)
    }

    /// Root of the REST collections, ending in `/`.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Root of the navigation-menu routes, ending in `/`.
    pub fn menu_root(&self) -> &Url {
        &self.menu_root
    }

    /// Resolve a path relative to the REST root.
    pub(crate) fn api_url(&self, path: &str, endpoint: &str) -> Result<Url, ContentApiError> {
        join(&self.api_root, path, endpoint)
    }

    /// Resolve a path relative to the menu root.
    pub(crate) fn menu_url(&self, path: &str, endpoint: &str) -> Result<Url, ContentApiError> {
        join(&self.menu_root, path, endpoint)
    }

    /// Issue a GET, retrying transport failures. The status is not inspected.
    pub(crate) async fn send(
        &self,
        endpoint: &str,
        url: &Url,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ContentApiError> {
        tracing::trace!(endpoint, %url, "content API request");
        crate::retry::retry_send(self.max_retries, || {
            self.http.get(url.clone()).query(query).send()
        })
        .await
        .map_err(|e| ContentApiError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }

    /// GET and require a success status.
    pub(crate) async fn get_ok(
        &self,
        endpoint: &str,
        url: &Url,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ContentApiError> {
        let resp = self.send(endpoint, url, query).await?;
        ensure_success(endpoint, resp).await
    }

    /// GET, require success and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        url: &Url,
        query: &[(&str, String)],
    ) -> Result<T, ContentApiError> {
        let resp = self.get_ok(endpoint, url, query).await?;
        decode(endpoint, resp).await
    }
}

/// Turn a non-2xx response into [`ContentApiError::ApiError`], keeping the body.
pub(crate) async fn ensure_success(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ContentApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ContentApiError::ApiError {
        endpoint: endpoint.to_string(),
        status,
        body,
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ContentApiError> {
    resp.json().await.map_err(|e| ContentApiError::Deserialization {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

/// Numeric pagination header; absent or unparsable reads as 0.
pub(crate) fn header_number<T: std::str::FromStr + Default>(
    headers: &reqwest::header::HeaderMap,
    name: &str,
) -> T {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

fn join(root: &Url, path: &str, endpoint: &str) -> Result<Url, ContentApiError> {
    root.join(path).map_err(|e| ContentApiError::Url {
        endpoint: endpoint.to_string(),
        source: e,
    })
}
