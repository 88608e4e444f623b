//! # Content Types
//!
//! A [`ContentType`] names one remote collection (`posts`, `project`,
//! `case-study`, ...). The key is interpolated directly into request paths,
//! so it is validated at construction: non-empty, lowercase ASCII letters,
//! digits, `-` and `_` only.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Key identifying a remote content collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
    /// The built-in blog post collection.
    pub const POSTS: Self = Self::from_static("posts");
    /// The built-in static page collection.
    pub const PAGES: Self = Self::from_static("pages");

    /// Create a content type from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidContentType`] if the key is empty or
    /// contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if is_valid_key(&s) {
            Ok(Self(Cow::Owned(s)))
        } else {
            Err(ValidationError::InvalidContentType(s))
        }
    }

    /// Content type from a literal key.
    ///
    /// Intended for `const` items, where an invalid key fails compilation.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a valid collection key.
    pub const fn from_static(key: &'static str) -> Self {
        assert!(is_valid_key(key), "invalid content type key");
        Self(Cow::Borrowed(key))
    }

    /// The built-in blog post collection.
    pub fn posts() -> Self {
        Self::POSTS
    }

    /// The built-in static page collection.
    pub fn pages() -> Self {
        Self::PAGES
    }

    /// Access the collection key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_valid_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_') {
            return false;
        }
        i += 1;
    }
    true
}

impl Default for ContentType {
    fn default() -> Self {
        Self::posts()
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContentType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.0.into_owned()
    }
}
