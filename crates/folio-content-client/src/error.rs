//! Content API client error types.

/// Errors from content API calls.
///
/// Most public operations degrade these to empty or absent results and only
/// log them; [`ContentClient::get_entity_by_id`](crate::ContentClient::get_entity_by_id)
/// and the related-content lookup built on it surface them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ContentApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Content API returned a non-2xx status.
    #[error("content API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Request URL could not be built from the configured base.
    #[error("invalid request URL for {endpoint}: {source}")]
    Url {
        endpoint: String,
        source: url::ParseError,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ContentApiError {
    /// The `METHOD /route` the failing call was made against, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Http { endpoint, .. }
            | Self::ApiError { endpoint, .. }
            | Self::Deserialization { endpoint, .. }
            | Self::Url { endpoint, .. } => Some(endpoint),
            Self::Config(_) => None,
        }
    }

    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}
