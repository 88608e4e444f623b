//! # Error Types
//!
//! Validation errors for the domain primitives in this crate. Each variant
//! carries the rejected input so that a misconfigured caller can be
//! diagnosed from the log line alone.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Content-type key is empty or contains characters outside `[a-z0-9_-]`.
    #[error("invalid content type: \"{0}\" (expected lowercase letters, digits, '-' or '_')")]
    InvalidContentType(String),

    /// Backend identifiers are strictly positive.
    #[error("invalid {kind} identifier: {value} (expected a positive integer)")]
    InvalidId {
        /// Which identifier family was being parsed.
        kind: &'static str,
        /// The rejected value.
        value: i64,
    },
}
