//! Raw menu payload handling: unwrapping, flattening and deduplication.
//!
//! Items are read field-by-field from `serde_json::Value` rather than through
//! a derived `Deserialize`, so one oddly-typed field degrades that field to
//! its default instead of discarding the whole menu.

use std::collections::HashSet;

use serde_json::Value;

/// Field under which object-shaped payloads carry their item array.
pub const ITEMS_FIELD: &str = "items";

/// One menu item as read from the payload, before linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMenuItem {
    pub id: u64,
    pub title: String,
    /// Raw URL; `None` when the field is absent or empty.
    pub url: Option<String>,
    pub order: i64,
    /// Declared parent id, `0` when absent.
    pub parent: u64,
}

impl RawMenuItem {
    /// Read an item from its JSON object. Returns `None` when the object has
    /// no usable id (missing, zero, negative, or non-numeric).
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj.get("id").or_else(|| obj.get("ID")).and_then(lenient_u64)?;
        if id == 0 {
            return None;
        }

        let title = match obj.get("title") {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Object(o)) => o
                .get("rendered")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_string(),
            _ => String::new(),
        };

        let url = obj
            .get("url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let order = obj
            .get("order")
            .or_else(|| obj.get("menu_order"))
            .and_then(lenient_i64)
            .unwrap_or(0);

        let parent = obj
            .get("parent")
            .or_else(|| obj.get("menu_item_parent"))
            .and_then(lenient_u64)
            .unwrap_or(0);

        Some(Self {
            id,
            title,
            url,
            order,
            parent,
        })
    }
}

/// Accept numbers and numeric strings; some menu plugins emit ids as strings.
fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extract the top-level item array from a payload.
///
/// A bare array is used as-is; an object contributes its `items` array;
/// anything else (including `null`) yields an empty slice.
pub fn top_level_items(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(obj) => obj
            .get(ITEMS_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

/// Flatten nested `children` depth-first (pre-order) into one sequence.
pub fn flatten(items: &[Value]) -> Vec<&Value> {
    let mut out = Vec::new();
    let mut stack: Vec<&Value> = items.iter().rev().collect();
    while let Some(item) = stack.pop() {
        out.push(item);
        if let Some(children) = item.get("children").and_then(Value::as_array) {
            stack.extend(children.iter().rev());
        }
    }
    out
}

/// Unwrap, flatten and deduplicate a payload into parsed items.
///
/// The first occurrence of each id wins; later duplicates are discarded.
/// Their nested children were already flattened into the sequence and are
/// kept or discarded on their own ids.
pub fn items_from_payload(payload: &Value) -> Vec<RawMenuItem> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in flatten(top_level_items(payload)) {
        match RawMenuItem::from_value(value) {
            Some(item) => {
                if seen.insert(item.id) {
                    out.push(item);
                } else {
                    tracing::debug!(id = item.id, "duplicate menu item discarded");
                }
            }
            None => tracing::debug!("menu item without a usable id skipped"),
        }
    }
    out
}
