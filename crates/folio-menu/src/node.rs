//! The public menu node.

use serde::{Deserialize, Serialize};

/// One entry of a normalized navigation menu.
///
/// `parent_id` is the id of the node this entry is actually attached under,
/// `0` for roots. Orphans and entries whose parent link would close a cycle
/// are roots, so their `parent_id` is `0` regardless of the raw `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: u64,
    pub title: String,
    pub href: String,
    pub order: i64,
    pub parent_id: u64,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// False for parent-only entries whose href is the `#` placeholder.
    pub fn is_navigable(&self) -> bool {
        self.href != crate::href::PLACEHOLDER
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuNode::subtree_len).sum::<usize>()
    }

    /// Depth-first, pre-order walk over this subtree.
    pub fn walk(&self) -> Vec<&MenuNode> {
        let mut out = Vec::with_capacity(self.subtree_len());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// True when `path` equals this node's href or lies below it.
    ///
    /// Used by renderers to highlight the active section; the root href only
    /// matches `/` itself.
    pub fn matches_path(&self, path: &str) -> bool {
        if !self.is_navigable() {
            return false;
        }
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path
                .strip_prefix(self.href.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Total number of nodes in a forest.
pub fn forest_len(forest: &[MenuNode]) -> usize {
    forest.iter().map(MenuNode::subtree_len).sum()
}
