//! # CLI Configuration
//!
//! Resolves the [`ContentApiConfig`] from three layers, highest first:
//! the `--base-url` flag, the YAML file given with `--config`, and the
//! `FOLIO_*` environment variables.
//!
//! ```yaml
//! base_url: https://cms.example.com
//! api_prefix: wp-json/wp/v2
//! menu_prefix: wp-json/wp-api-menus/v2/menus
//! timeout_secs: 10
//! max_retries: 2
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use folio_content_client::config::ENV_BASE_URL;
use folio_content_client::{ConfigError, ContentApiConfig};

/// Contents of a `--config` YAML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub api_prefix: Option<String>,
    pub menu_prefix: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

impl CliConfig {
    /// Load and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}

/// Build the client configuration from flag, file and environment.
pub fn resolve(base_url_flag: Option<&str>, file: &CliConfig) -> Result<ContentApiConfig> {
    let env_base = std::env::var(ENV_BASE_URL).ok();
    merge(base_url_flag, file, env_base.as_deref())
}

fn merge(
    base_url_flag: Option<&str>,
    file: &CliConfig,
    env_base: Option<&str>,
) -> Result<ContentApiConfig> {
    let base = base_url_flag
        .or(file.base_url.as_deref())
        .or(env_base)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingBaseUrl)?;

    let mut config = ContentApiConfig::parse(base)?;
    config.apply_env()?;

    if let Some(prefix) = &file.api_prefix {
        config.api_prefix = prefix.clone();
    }
    if let Some(prefix) = &file.menu_prefix {
        config.menu_prefix = prefix.clone();
    }
    if let Some(secs) = file.timeout_secs {
        config.timeout_secs = Some(secs);
    }
    if let Some(retries) = file.max_retries {
        config.max_retries = retries;
    }
    Ok(config)
}
