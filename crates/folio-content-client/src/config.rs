//! Content API client configuration.
//!
//! The only required setting is the backend base URL; without it no call can
//! succeed, so its absence is a hard error at construction time rather than
//! a degraded result later. Everything else has a default that matches a
//! stock installation of the content backend.

use url::Url;

/// Environment variable holding the backend base URL (required).
pub const ENV_BASE_URL: &str = "FOLIO_API_URL";
/// Environment variable overriding the REST route prefix.
pub const ENV_API_PREFIX: &str = "FOLIO_API_PREFIX";
/// Environment variable overriding the navigation-menu route prefix.
pub const ENV_MENU_PREFIX: &str = "FOLIO_MENU_PREFIX";
/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "FOLIO_TIMEOUT_SECS";
/// Environment variable setting the transport retry count.
pub const ENV_MAX_RETRIES: &str = "FOLIO_MAX_RETRIES";

/// Default REST route prefix, relative to the base URL.
pub const DEFAULT_API_PREFIX: &str = "wp-json/wp/v2";
/// Default navigation-menu route prefix, relative to the base URL.
pub const DEFAULT_MENU_PREFIX: &str = "wp-json/wp-api-menus/v2/menus";

/// Configuration for connecting to the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentApiConfig {
    /// Backend base URL, always ending in `/`.
    pub base_url: Url,
    /// REST route prefix (e.g. `wp-json/wp/v2`).
    pub api_prefix: String,
    /// Navigation-menu route prefix (e.g. `wp-json/wp-api-menus/v2/menus`).
    pub menu_prefix: String,
    /// Optional request timeout. `None` leaves deadlines to the caller.
    pub timeout_secs: Option<u64>,
    /// Transport retries per request. `0` is single-shot.
    pub max_retries: u32,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ContentApiConfig {
    /// Configuration with defaults for everything but the base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            menu_prefix: DEFAULT_MENU_PREFIX.to_string(),
            timeout_secs: None,
            max_retries: 0,
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Parse the base URL from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `raw` is not an absolute URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl(ENV_BASE_URL.to_string(), e.to_string()))?;
        Ok(Self::new(url))
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FOLIO_API_URL` (required)
    /// - `FOLIO_API_PREFIX` (default: `wp-json/wp/v2`)
    /// - `FOLIO_MENU_PREFIX` (default: `wp-json/wp-api-menus/v2/menus`)
    /// - `FOLIO_TIMEOUT_SECS` (default: none)
    /// - `FOLIO_MAX_RETRIES` (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(ENV_BASE_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let mut config = Self::parse(raw.trim())?;
        config.apply_env()?;
        Ok(config)
    }

    /// Override the optional settings from whichever `FOLIO_*` variables are
    /// set. The base URL is left alone.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(prefix) = std::env::var(ENV_API_PREFIX) {
            self.api_prefix = prefix;
        }
        if let Ok(prefix) = std::env::var(ENV_MENU_PREFIX) {
            self.menu_prefix = prefix;
        }
        if let Some(secs) = env_number(ENV_TIMEOUT_SECS)? {
            self.timeout_secs = Some(secs);
        }
        if let Some(retries) = env_number(ENV_MAX_RETRIES)? {
            self.max_retries = retries;
        }
        Ok(())
    }

    /// Root URL of the REST collections, ending in `/`.
    pub fn api_root(&self) -> Result<Url, ConfigError> {
        join_prefix(&self.base_url, &self.api_prefix, ENV_API_PREFIX)
    }

    /// Root URL of the navigation-menu routes, ending in `/`.
    pub fn menu_root(&self) -> Result<Url, ConfigError> {
        join_prefix(&self.base_url, &self.menu_prefix, ENV_MENU_PREFIX)
    }
}

/// Relative joins drop the last path segment unless the base ends in `/`,
/// which would silently discard a sub-directory install such as `/blog`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn join_prefix(base: &Url, prefix: &str, var: &str) -> Result<Url, ConfigError> {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(base.clone());
    }
    base.join(&format!("{trimmed}/"))
        .map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_number<T: std::str::FromStr>(var: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber(var.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FOLIO_API_URL environment variable is required")]
    MissingBaseUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
}
