//! Takeoff Quantities
//!
//! Measured quantities grouped by model element, plus the reference tree
//! shown in the formula editor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, TreeNode};

/// A single measurement taken from a model element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityItem {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    #[serde(default)]
    pub cost_mapped: bool,
    #[serde(default)]
    pub task_mapped: bool,
}

impl QuantityItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            unit: unit.into(),
            cost_mapped: false,
            task_mapped: false,
        }
    }
}

impl Entity for QuantityItem {
    fn id(&self) -> &str {
        &self.id
    }
}

fn default_expression() -> String {
    "Quantity Exp.".to_string()
}

/// A named BIM object and the quantities measured on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: String,
    /// Label of the element's quantity expression link
    #[serde(default = "default_expression")]
    pub quantity_expression: String,
    #[serde(default)]
    pub quantities: Vec<QuantityItem>,
    #[serde(default)]
    pub cost_mapped: bool,
    #[serde(default)]
    pub task_mapped: bool,
}

impl Element {
    pub fn new(id: impl Into<String>, name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            element_type: element_type.into(),
            quantity_expression: default_expression(),
            quantities: Vec::new(),
            cost_mapped: false,
            task_mapped: false,
        }
    }

    pub fn with_quantities(mut self, quantities: Vec<QuantityItem>) -> Self {
        self.quantities = quantities;
        self
    }

    pub fn quantity(&self, id: &str) -> Option<&QuantityItem> {
        self.quantities.iter().find(|q| q.id == id)
    }
}

impl Entity for Element {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload carried by a quantity row while it is being dragged
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityDrag {
    pub element_id: String,
    pub quantity: QuantityItem,
}

impl QuantityDrag {
    pub fn new(element_id: impl Into<String>, quantity: QuantityItem) -> Self {
        Self {
            element_id: element_id.into(),
            quantity,
        }
    }

    /// Identity of the drag source: `{element}-{quantity}`
    pub fn drag_id(&self) -> String {
        format!("{}-{}", self.element_id, self.quantity.id)
    }
}

/// Node of the formula editor's quantity reference tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<QuantityNode>>,
}

impl Entity for QuantityNode {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TreeNode for QuantityNode {
    fn children(&self) -> &[Arc<Self>] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_id_joins_element_and_quantity() {
        let drag = QuantityDrag::new("E001", QuantityItem::new("Q003", "Net Volume", 26.6, "M3"));
        assert_eq!(drag.drag_id(), "E001-Q003");
    }

    #[test]
    fn test_element_deserializes_type_and_default_expression() {
        let json = r#"{
            "id": "E001",
            "name": "Wall",
            "type": "Wall",
            "quantities": [
                { "id": "Q001", "name": "Count", "value": 33.0, "unit": "EA", "costMapped": true }
            ]
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.element_type, "Wall");
        assert_eq!(element.quantity_expression, "Quantity Exp.");
        let count = element.quantity("Q001").unwrap();
        assert!(count.cost_mapped);
        assert!(!count.task_mapped);
        assert!(element.quantity("Q999").is_none());
    }

    #[test]
    fn test_quantity_node_leaf_has_no_children() {
        let json = r#"{ "id": "1-1", "name": "Length", "value": 85.6, "unit": "M" }"#;
        let node: QuantityNode = serde_json::from_str(json).unwrap();
        assert!(!node.has_children());
    }
}
