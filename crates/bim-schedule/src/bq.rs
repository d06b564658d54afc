//! Bill of Quantities
//!
//! The BQ tree and the mapping operation that binds a takeoff quantity to
//! one of its leaves. Trees are persistent values: a mapping rebuilds only
//! the path from the root to the target and shares every other subtree.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::{DomainError, DomainResult, Entity, TreeNode};
use crate::quantity::{QuantityDrag, QuantityItem};

/// A node of the bill-of-quantities tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BqItem {
    pub id: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub uom: String,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub mapped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_quantity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<BqItem>>,
    pub level: u32,
}

impl BqItem {
    pub fn new(id: impl Into<String>, code: impl Into<String>, description: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            description: description.into(),
            quantity: 0.0,
            uom: String::new(),
            unit_cost: 0.0,
            total_cost: 0.0,
            mapped: false,
            mapped_quantity_id: None,
            children: Vec::new(),
            level,
        }
    }

    pub fn with_quantity(mut self, quantity: f64, uom: impl Into<String>) -> Self {
        self.quantity = quantity;
        self.uom = uom.into();
        self
    }

    pub fn with_children(mut self, children: Vec<BqItem>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    /// Only leaves are eligible to receive a mapping
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Copy of this node bound to `quantity`
    fn mapped_to(&self, quantity: &QuantityItem) -> BqItem {
        BqItem {
            mapped: true,
            mapped_quantity_id: Some(quantity.id.clone()),
            quantity: quantity.value,
            ..self.clone()
        }
    }
}

impl Entity for BqItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TreeNode for BqItem {
    fn children(&self) -> &[Arc<Self>] {
        &self.children
    }
}

/// Reasons a drop does not produce a new tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("no bill-of-quantities item with id {0}")]
    NotFound(String),
    #[error("drag source {0} was dropped onto itself")]
    SameIdentity(String),
    #[error("bill-of-quantities item {0} has children and cannot take a mapping")]
    NotLeaf(String),
}

/// Ordered forest of BQ roots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BqTree {
    roots: Vec<Arc<BqItem>>,
}

impl BqTree {
    pub fn new(roots: Vec<BqItem>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn roots(&self) -> &[Arc<BqItem>] {
        &self.roots
    }

    /// Depth-first pre-order walk over every node
    pub fn iter(&self) -> Preorder<'_> {
        Preorder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Total node count
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Arc<BqItem>> {
        self.iter().find(|item| item.id == id)
    }

    /// Checks id uniqueness and that every child sits one level below its parent
    pub fn validate(&self) -> DomainResult<()> {
        let mut seen = BTreeSet::new();
        for item in self.iter() {
            if !seen.insert(item.id.as_str()) {
                return Err(DomainError::InvalidInput(format!("duplicate BQ id {}", item.id)));
            }
            for child in &item.children {
                if child.level != item.level + 1 {
                    return Err(DomainError::InvalidInput(format!(
                        "BQ {} is at level {} under {} at level {}",
                        child.id, child.level, item.id, item.level
                    )));
                }
            }
        }
        Ok(())
    }

    /// Binds the dragged quantity to leaf `target_id`, returning the new tree.
    ///
    /// Ancestors of the target are rebuilt; every other node is shared with
    /// `self`. Cost and quantity fields of ancestors are left as they were.
    pub fn map_quantity(&self, drag: &QuantityDrag, target_id: &str) -> Result<BqTree, MappingError> {
        if drag.drag_id() == target_id {
            return Err(MappingError::SameIdentity(target_id.to_string()));
        }
        // Single pass: locate, check leafness and rebuild the path together
        let roots = replace_node(&self.roots, target_id, &|item| {
            if item.is_leaf() {
                Ok(item.mapped_to(&drag.quantity))
            } else {
                Err(MappingError::NotLeaf(item.id.clone()))
            }
        })
        .unwrap_or_else(|| Err(MappingError::NotFound(target_id.to_string())))?;

        debug!(
            target = target_id,
            quantity = %drag.quantity.id,
            element = %drag.element_id,
            value = drag.quantity.value,
            "mapped quantity onto BQ item"
        );
        Ok(BqTree { roots })
    }

    /// Like [`map_quantity`](Self::map_quantity), but hands back an unchanged
    /// copy of `self` alongside the error when the drop is rejected.
    pub fn apply_mapping(&self, drag: &QuantityDrag, target_id: &str) -> (BqTree, Option<MappingError>) {
        match self.map_quantity(drag, target_id) {
            Ok(tree) => (tree, None),
            Err(err) => {
                warn!(error = %err, drag = %drag.drag_id(), "quantity drop rejected");
                (self.clone(), Some(err))
            }
        }
    }
}

/// Rebuilds `nodes` with node `id` replaced by `update(node)`.
/// Returns `None` when `id` is not in this forest.
fn replace_node(
    nodes: &[Arc<BqItem>],
    id: &str,
    update: &dyn Fn(&BqItem) -> Result<BqItem, MappingError>,
) -> Option<Result<Vec<Arc<BqItem>>, MappingError>> {
    nodes.iter().enumerate().find_map(|(idx, node)| {
        let replacement = if node.id == id {
            update(node).map(Arc::new)
        } else {
            replace_node(&node.children, id, update)?.map(|children| {
                Arc::new(BqItem {
                    children,
                    ..BqItem::clone(node)
                })
            })
        };
        Some(replacement.map(|replacement| {
            let mut rebuilt = nodes.to_vec();
            rebuilt[idx] = replacement;
            rebuilt
        }))
    })
}

/// Pre-order iterator over a [`BqTree`]
pub struct Preorder<'a> {
    stack: Vec<&'a Arc<BqItem>>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Arc<BqItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
