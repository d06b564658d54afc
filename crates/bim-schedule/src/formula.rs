//! Formula Editor
//!
//! Holds the formula typed against a BQ item. The text is stored as
//! entered; nothing parses or evaluates it.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::bq::BqItem;
use crate::config::FormulaEditorConfig;
use crate::format;
use crate::quantity::QuantityNode;
use crate::tree::{visible_rows, ExpandedSet, VisibleRow};

/// Open editor dialog for one BQ item
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaEditor {
    bq_id: String,
    code: String,
    description: String,
    text: String,
    evaluated: String,
    expanded: ExpandedSet,
}

impl FormulaEditor {
    /// Starts from the saved formula, or the configured default
    pub fn open(item: &BqItem, saved: Option<&str>, config: &FormulaEditorConfig) -> Self {
        Self {
            bq_id: item.id.clone(),
            code: item.code.clone(),
            description: item.description.clone(),
            text: saved.unwrap_or(&config.default_formula).to_string(),
            evaluated: format::grouped(item.quantity, 1),
            expanded: config.expanded_nodes.clone(),
        }
    }

    pub fn bq_id(&self) -> &str {
        &self.bq_id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The item's current quantity, shown beside the formula
    pub fn evaluated(&self) -> &str {
        &self.evaluated
    }

    pub fn toggle_node(&mut self, id: &str) -> bool {
        self.expanded.toggle(id)
    }

    pub fn quantity_rows(&self, roots: &[Arc<QuantityNode>]) -> Vec<VisibleRow<QuantityNode>> {
        visible_rows(roots, &self.expanded)
    }
}

/// Saved formulas keyed by BQ id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaBook(BTreeMap<String, String>);

impl FormulaBook {
    pub fn get(&self, bq_id: &str) -> Option<&str> {
        self.0.get(bq_id).map(String::as_str)
    }

    /// Stores `text`, returning the formula it replaced
    pub fn save(&mut self, bq_id: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(bq_id.into(), text.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormulaEditorConfig {
        FormulaEditorConfig {
            default_formula: "0 + Net Volume".into(),
            expanded_nodes: ["1"].into_iter().collect(),
        }
    }

    #[test]
    fn test_open_uses_saved_or_default_formula() {
        let item = BqItem::new("BQ005", "A.01", "Not exceeding 1.50 m deep", 5).with_quantity(2945.2, "m3");

        let editor = FormulaEditor::open(&item, None, &config());
        assert_eq!(editor.text(), "0 + Net Volume");
        assert_eq!(editor.evaluated(), "2,945.2");

        let editor = FormulaEditor::open(&item, Some("Q003 * 2"), &config());
        assert_eq!(editor.text(), "Q003 * 2");
    }

    #[test]
    fn test_quantity_tree_follows_own_expand_state() {
        let roots = vec![Arc::new(QuantityNode {
            id: "1".into(),
            name: "Wall".into(),
            value: 0.0,
            unit: String::new(),
            children: vec![Arc::new(QuantityNode {
                id: "1-1".into(),
                name: "Count".into(),
                value: 32.0,
                unit: "EA".into(),
                children: vec![],
            })],
        })];
        let mut editor = FormulaEditor::open(&BqItem::new("B", "B", "b", 0), None, &config());
        assert_eq!(editor.quantity_rows(&roots).len(), 2);
        assert!(!editor.toggle_node("1"));
        assert_eq!(editor.quantity_rows(&roots).len(), 1);
    }

    #[test]
    fn test_book_replaces_previous_formula() {
        let mut book = FormulaBook::default();
        assert_eq!(book.save("BQ005", "a"), None);
        assert_eq!(book.save("BQ005", "b"), Some("a".to_string()));
        assert_eq!(book.get("BQ005"), Some("b"));
        assert_eq!(book.len(), 1);
    }
}
