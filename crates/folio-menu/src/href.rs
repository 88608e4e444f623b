//! URL normalization for menu links.
//!
//! Menu items reference pages on the content backend's own domain, but the
//! site is served from elsewhere, so only the path survives. Query strings
//! and fragments are dropped along with scheme and host.

use url::Url;

/// Placeholder URL used by parent-only (non-navigable) menu entries.
pub const PLACEHOLDER: &str = "#";

/// Base used to resolve relative menu URLs when none is configured.
pub const DEFAULT_BASE: &str = "https://localhost/";

/// Reduce a raw menu URL to a path-only `href`.
///
/// - `#` passes through unchanged.
/// - Otherwise the URL is resolved against `base` and only its path is kept,
///   with one trailing slash removed unless the path is `/`.
/// - If resolution fails the raw string is returned, or `/` when it is empty.
pub fn normalize_href_with_base(raw: &str, base: &Url) -> String {
    path_of(raw, base.join(raw))
}

/// [`normalize_href_with_base`] against [`DEFAULT_BASE`].
pub fn normalize_href(raw: &str) -> String {
    path_of(raw, Url::parse(DEFAULT_BASE).and_then(|base| base.join(raw)))
}

fn path_of(raw: &str, resolved: Result<Url, url::ParseError>) -> String {
    if raw == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }

    match resolved {
        Ok(resolved) => {
            let path = resolved.path();
            let trimmed = if path.len() > 1 {
                path.strip_suffix('/').unwrap_or(path)
            } else {
                path
            };
            if trimmed.is_empty() {
                "/".to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(e) => {
            tracing::debug!(url = raw, error = %e, "menu url unparsable, keeping raw value");
            if raw.is_empty() {
                "/".to_string()
            } else {
                raw.to_string()
            }
        }
    }
}
