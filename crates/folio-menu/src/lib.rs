//! # folio-menu — Navigation Menu Tree Builder
//!
//! Converts the raw payload of a navigation-menu endpoint into a clean,
//! ordered forest of [`MenuNode`]s ready for rendering.
//!
//! The raw payload is loosely shaped: it may be a bare array or an object
//! wrapping the array under `items`, it may already be nested through
//! `children`, it may repeat ids, and each `url` may be absolute, relative,
//! or the `#` placeholder. Building never fails; anything unusable degrades
//! to fewer nodes, never to an error.
//!
//! ## Pipeline
//!
//! 1. [`raw::items_from_payload`]: unwrap the payload, flatten nesting
//!    depth-first, keep the first occurrence of every id.
//! 2. [`href::normalize_href`]: reduce each URL to a path.
//! 3. [`tree::MenuTreeBuilder`]: link children to parents (orphans and
//!    cycle-closing links become roots), then sort every sibling list by
//!    `order`, stable on encounter order. Nesting is capped at
//!    [`tree::MAX_DEPTH`]; deeper items are re-rooted rather than dropped.
//!
//! ```
//! use folio_menu::build_menu_tree;
//!
//! let raw = serde_json::json!([
//!     {"id": 1, "title": "A", "url": "/a", "order": 2, "parent": 0},
//!     {"id": 2, "title": "B", "url": "/b", "order": 1, "parent": 0},
//!     {"id": 3, "title": "C", "url": "/c", "order": 0, "parent": 1},
//! ]);
//! let tree = build_menu_tree(&raw);
//! assert_eq!(tree[0].title, "B");
//! assert_eq!(tree[1].children[0].title, "C");
//! ```

pub mod href;
pub mod node;
pub mod raw;
pub mod tree;

pub use href::normalize_href;
pub use node::MenuNode;
pub use tree::MenuTreeBuilder;

/// Build a menu forest with the default URL base.
pub fn build_menu_tree(payload: &serde_json::Value) -> Vec<MenuNode> {
    MenuTreeBuilder::new().build(payload)
}
