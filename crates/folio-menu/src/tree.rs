//! Parent/child linking and ordering.

use std::collections::{HashMap, VecDeque};

use serde_json::Value;
use url::Url;

use crate::href::{normalize_href, normalize_href_with_base, PLACEHOLDER};
use crate::node::MenuNode;
use crate::raw::{items_from_payload, RawMenuItem};

/// Deepest nesting level of a built tree; roots are level 1. Children of a
/// node at this level are detached and appended to the root list.
pub const MAX_DEPTH: usize = 32;

/// Builds an ordered menu forest from a raw navigation payload.
#[derive(Debug, Clone)]
pub struct MenuTreeBuilder {
    base: Option<Url>,
}

impl Default for MenuTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTreeBuilder {
    /// A builder resolving relative URLs against
    /// [`DEFAULT_BASE`](crate::href::DEFAULT_BASE).
    pub fn new() -> Self {
        Self { base: None }
    }

    /// A builder resolving relative URLs against `base`.
    pub fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    /// Build the forest. Never fails: unusable input yields fewer nodes.
    pub fn build(&self, payload: &Value) -> Vec<MenuNode> {
        let items = items_from_payload(payload);
        if items.is_empty() {
            return Vec::new();
        }
        self.build_from_items(&items)
    }

    /// Build from already-flattened, deduplicated items.
    pub fn build_from_items(&self, items: &[RawMenuItem]) -> Vec<MenuNode> {
        let index: HashMap<u64, usize> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id, i))
            .collect();

        // Accepted parent per item, by index. Links are decided in encounter
        // order; a link that would make an item its own ancestor is refused
        // and the item becomes a root.
        let mut parent_of: Vec<Option<usize>> = vec![None; items.len()];
        for (i, item) in items.iter().enumerate() {
            if item.parent == 0 {
                continue;
            }
            let Some(&p) = index.get(&item.parent) else {
                tracing::debug!(id = item.id, parent = item.parent, "orphan menu item promoted to root");
                continue;
            };
            if closes_cycle(&parent_of, i, p) {
                tracing::debug!(id = item.id, parent = item.parent, "cyclic menu parent link ignored");
                continue;
            }
            parent_of[i] = Some(p);
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
        let mut roots = Vec::new();
        for (i, parent) in parent_of.iter().enumerate() {
            match parent {
                Some(p) => children[*p].push(i),
                None => roots.push(i),
            }
        }

        // Stable sort: equal orders keep encounter order.
        let by_order = |list: &mut Vec<usize>| list.sort_by_key(|&i| items[i].order);
        by_order(&mut roots);
        children.iter_mut().for_each(by_order);

        let mut forest = Vec::with_capacity(roots.len());
        let mut pending: VecDeque<usize> = roots.into();
        while let Some(i) = pending.pop_front() {
            let mut detached = Vec::new();
            forest.push(self.assemble(items, &children, i, 0, 1, &mut detached));
            pending.extend(detached);
        }
        forest
    }

    fn assemble(
        &self,
        items: &[RawMenuItem],
        children: &[Vec<usize>],
        i: usize,
        parent_id: u64,
        depth: usize,
        detached: &mut Vec<usize>,
    ) -> MenuNode {
        let item = &items[i];
        let kids = if depth < MAX_DEPTH {
            children[i]
                .iter()
                .map(|&c| self.assemble(items, children, c, item.id, depth + 1, detached))
                .collect()
        } else {
            if !children[i].is_empty() {
                tracing::debug!(id = item.id, depth, "menu nesting too deep, detaching children");
            }
            detached.extend(&children[i]);
            Vec::new()
        };
        let raw = item.url.as_deref().unwrap_or(PLACEHOLDER);
        let href = match &self.base {
            Some(base) => normalize_href_with_base(raw, base),
            None => normalize_href(raw),
        };
        MenuNode {
            id: item.id,
            title: item.title.clone(),
            href,
            order: item.order,
            parent_id,
            children: kids,
        }
    }
}

/// True if attaching `child` under `parent` would make `child` its own
/// ancestor, given the links accepted so far.
fn closes_cycle(parent_of: &[Option<usize>], child: usize, parent: usize) -> bool {
    let mut cursor = Some(parent);
    while let Some(c) = cursor {
        if c == child {
            return true;
        }
        cursor = parent_of[c];
    }
    false
}
