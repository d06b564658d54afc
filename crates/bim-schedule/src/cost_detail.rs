//! 5D Cost Detail State
//!
//! Everything the cost detail page changes while it is open: the BQ tree,
//! both expand sets and the formula dialog. Dropped when the page closes.

use tracing::debug;

use crate::bq::{BqItem, BqTree, MappingError};
use crate::config::{DashboardConfig, FormulaEditorConfig};
use crate::entity::{DomainError, DomainResult};
use crate::formula::{FormulaBook, FormulaEditor};
use crate::quantity::{Element, QuantityDrag};
use crate::takeoff::{takeoff_rows, TakeoffRow};
use crate::tree::{visible_rows, ExpandedSet, VisibleRow};

#[derive(Debug, Clone, PartialEq)]
pub struct CostDetailState {
    schedule_id: String,
    tree: BqTree,
    expanded_bq: ExpandedSet,
    expanded_elements: ExpandedSet,
    indent_px: u32,
    formula: Option<FormulaEditor>,
    formulas: FormulaBook,
    editor_config: FormulaEditorConfig,
}

impl CostDetailState {
    pub fn new(schedule_id: impl Into<String>, tree: BqTree, config: &DashboardConfig) -> Self {
        Self {
            schedule_id: schedule_id.into(),
            tree,
            expanded_bq: config.cost_planner.expanded_bq.clone(),
            expanded_elements: config.cost_planner.expanded_elements.clone(),
            indent_px: config.cost_planner.indent_px,
            formula: None,
            formulas: FormulaBook::default(),
            editor_config: config.formula_editor.clone(),
        }
    }

    pub fn schedule_id(&self) -> &str {
        &self.schedule_id
    }

    pub fn tree(&self) -> &BqTree {
        &self.tree
    }

    pub fn expanded_bq(&self) -> &ExpandedSet {
        &self.expanded_bq
    }

    pub fn expanded_elements(&self) -> &ExpandedSet {
        &self.expanded_elements
    }

    pub fn formulas(&self) -> &FormulaBook {
        &self.formulas
    }

    /// Left margin of a BQ row, from its level
    pub fn indent_for(&self, item: &BqItem) -> u32 {
        item.level * self.indent_px
    }

    pub fn toggle_element(&mut self, id: &str) -> bool {
        let expanded = self.expanded_elements.toggle(id);
        debug!(element = id, expanded, "toggled takeoff element");
        expanded
    }

    pub fn toggle_bq(&mut self, id: &str) -> bool {
        let expanded = self.expanded_bq.toggle(id);
        debug!(bq = id, expanded, "toggled BQ item");
        expanded
    }

    pub fn expand_all_bq(&mut self) {
        self.expanded_bq.expand_all(self.tree.roots());
    }

    pub fn collapse_all_bq(&mut self) {
        self.expanded_bq.collapse_all();
    }

    pub fn bq_rows(&self) -> Vec<VisibleRow<BqItem>> {
        visible_rows(self.tree.roots(), &self.expanded_bq)
    }

    pub fn takeoff_rows(&self, elements: &[Element]) -> Vec<TakeoffRow> {
        takeoff_rows(elements, &self.expanded_elements)
    }

    /// Maps a dropped quantity onto `target_id`. On error the tree is kept.
    pub fn drop_quantity(&mut self, drag: &QuantityDrag, target_id: &str) -> Result<(), MappingError> {
        let (tree, err) = self.tree.apply_mapping(drag, target_id);
        self.tree = tree;
        err.map_or(Ok(()), Err)
    }

    pub fn formula(&self) -> Option<&FormulaEditor> {
        self.formula.as_ref()
    }

    pub fn formula_mut(&mut self) -> Option<&mut FormulaEditor> {
        self.formula.as_mut()
    }

    pub fn open_formula(&mut self, bq_id: &str) -> DomainResult<()> {
        let item = self
            .tree
            .find(bq_id)
            .ok_or_else(|| DomainError::NotFound(format!("BQ item {bq_id}")))?;
        self.formula = Some(FormulaEditor::open(item, self.formulas.get(bq_id), &self.editor_config));
        Ok(())
    }

    pub fn close_formula(&mut self) {
        self.formula = None;
    }

    /// Stores the open formula and closes the dialog.
    /// Returns the BQ id and the saved text.
    pub fn save_formula(&mut self) -> Option<(String, String)> {
        let editor = self.formula.take()?;
        let bq_id = editor.bq_id().to_string();
        let text = editor.text().to_string();
        self.formulas.save(bq_id.clone(), text.clone());
        debug!(bq = %bq_id, formula = %text, "saved formula");
        Some((bq_id, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::QuantityItem;

    fn state() -> CostDetailState {
        let tree = BqTree::new(vec![BqItem::new("BQ001", "A", "A", 1).with_children(vec![
            BqItem::new("BQ005", "A.01", "leaf", 2),
            BqItem::new("BQ006", "A.02", "leaf", 2).with_quantity(2482.6, "m3"),
        ])]);
        let config = DashboardConfig::default();
        CostDetailState::new("5D-001", tree, &config)
    }

    #[test]
    fn test_toggle_and_expand_all() {
        let mut state = state();
        assert_eq!(state.bq_rows().len(), 1);
        assert!(state.toggle_bq("BQ001"));
        assert_eq!(state.bq_rows().len(), 3);
        state.collapse_all_bq();
        assert_eq!(state.bq_rows().len(), 1);
        state.expand_all_bq();
        assert_eq!(state.bq_rows().len(), 3);
        assert_eq!(state.indent_for(&state.bq_rows()[1].node), 24);
    }

    #[test]
    fn test_drop_replaces_tree_only_on_success() {
        let mut state = state();
        let drag = QuantityDrag::new("E001", QuantityItem::new("Q1", "Net Volume", 12.5, "M3"));

        state.drop_quantity(&drag, "BQ005").unwrap();
        let target = state.tree().find("BQ005").unwrap();
        assert!(target.mapped);
        assert_eq!(target.quantity, 12.5);

        let before = state.tree().clone();
        assert_eq!(
            state.drop_quantity(&drag, "missing"),
            Err(MappingError::NotFound("missing".to_string()))
        );
        assert_eq!(state.tree(), &before);
        assert_eq!(
            state.drop_quantity(&drag, "BQ001"),
            Err(MappingError::NotLeaf("BQ001".to_string()))
        );
        assert_eq!(state.tree(), &before);
    }

    #[test]
    fn test_formula_round_trip() {
        let mut state = state();
        assert!(state.open_formula("nope").is_err());

        state.open_formula("BQ006").unwrap();
        assert_eq!(state.formula().unwrap().evaluated(), "2,482.6");
        state.formula_mut().unwrap().set_text("Q001 + Q002");
        assert_eq!(state.save_formula(), Some(("BQ006".into(), "Q001 + Q002".into())));
        assert!(state.formula().is_none());

        state.open_formula("BQ006").unwrap();
        assert_eq!(state.formula().unwrap().text(), "Q001 + Q002");
        state.close_formula();
        assert_eq!(state.save_formula(), None);
    }
}
