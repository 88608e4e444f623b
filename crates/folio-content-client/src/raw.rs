//! Backend payload shapes, as loosely as they arrive.
//!
//! Every field is optional and defaulted. The live API adds fields freely
//! and plugins reshape others, so `deny_unknown_fields` is never used and
//! anything whose shape varies between installs (rendered-text wrappers,
//! the embed block, media details, custom fields) stays a `serde_json::Value`
//! until [`crate::normalize`] resolves it.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// A content entity (`GET /{collection}` item or `GET /{collection}/{id}`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawEntity {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub modified: Option<String>,
    pub status: Option<String>,
    pub link: Option<String>,
    pub title: Value,
    pub content: Value,
    pub excerpt: Value,
    pub comment_status: Option<String>,
    pub format: Option<String>,
    pub sticky: Option<bool>,
    pub acf: Value,
    pub yoast_head_json: Option<Value>,
    #[serde(rename = "_embedded")]
    pub embedded: Value,
}

impl RawEntity {
    /// First element of an embed list, e.g. `_embedded["wp:featuredmedia"][0]`.
    pub fn embed_first(&self, key: &str) -> Option<&Value> {
        self.embedded.get(key).and_then(|list| list.get(0))
    }

    /// One group of embedded terms: index 0 holds categories, 1 holds tags.
    pub fn embedded_terms(&self, group: usize) -> &[Value] {
        self.embedded
            .get("wp:term")
            .and_then(|groups| groups.get(group))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// An embedded or listed media attachment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawMedia {
    pub id: Option<i64>,
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Value,
    pub title: Value,
    pub media_details: Value,
}

/// An embedded author (backend user).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawAuthor {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub avatar_urls: BTreeMap<String, String>,
}

/// A category or tag, embedded or from a taxonomy listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawTerm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub count: Option<u64>,
}

/// Extract display text from a field that is either `{"rendered": "..."}`
/// or a bare string. Anything else is empty.
pub(crate) fn rendered(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("rendered")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}
