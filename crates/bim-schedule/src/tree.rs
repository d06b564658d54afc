//! Tree Rendering
//!
//! Expand/collapse bookkeeping and the projection of a tree into the flat
//! sequence of rows a table displays.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::TreeNode;

/// Ids of the nodes whose children are currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandedSet(BTreeSet<String>);

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Flips membership of `id`; returns whether it is now expanded
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.0.insert(id.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Expands every node in `roots` that has children
    pub fn expand_all<N: TreeNode>(&mut self, roots: &[Arc<N>]) {
        for node in roots {
            if node.has_children() {
                self.0.insert(node.id().to_string());
                self.expand_all(node.children());
            }
        }
    }

    pub fn collapse_all(&mut self) {
        self.0.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// One displayed row of a projected tree
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<N> {
    pub node: Arc<N>,
    /// Distance from the forest roots
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// Render nodes as a flat list using recursive DFS.
/// Children follow their parent only while the parent is expanded.
pub fn visible_rows<N: TreeNode>(roots: &[Arc<N>], expanded: &ExpandedSet) -> Vec<VisibleRow<N>> {
    fn collect<N: TreeNode>(
        nodes: &[Arc<N>],
        depth: usize,
        expanded: &ExpandedSet,
        result: &mut Vec<VisibleRow<N>>,
    ) {
        for node in nodes {
            let has_children = node.has_children();
            let is_expanded = has_children && expanded.contains(node.id());
            result.push(VisibleRow {
                node: Arc::clone(node),
                depth,
                has_children,
                expanded: is_expanded,
            });
            if is_expanded {
                collect(node.children(), depth + 1, expanded, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(roots, 0, expanded, &mut result);
    result
}
