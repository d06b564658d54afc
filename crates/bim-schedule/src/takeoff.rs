//! Takeoff Manager rows
//!
//! Element rows, each followed by its quantity rows while expanded.

use crate::quantity::{Element, QuantityDrag};
use crate::tree::ExpandedSet;

#[derive(Debug, Clone, PartialEq)]
pub enum TakeoffRow {
    Element { element: Element, expanded: bool },
    /// Quantity rows are the drag sources for cost mapping
    Quantity(QuantityDrag),
}

impl TakeoffRow {
    /// Stable key for keyed list rendering
    pub fn key(&self) -> String {
        match self {
            TakeoffRow::Element { element, .. } => element.id.clone(),
            TakeoffRow::Quantity(drag) => drag.drag_id(),
        }
    }
}

pub fn takeoff_rows(elements: &[Element], expanded: &ExpandedSet) -> Vec<TakeoffRow> {
    let mut rows = Vec::new();
    for element in elements {
        let is_expanded = expanded.contains(&element.id);
        rows.push(TakeoffRow::Element {
            element: element.clone(),
            expanded: is_expanded,
        });
        if is_expanded {
            rows.extend(
                element
                    .quantities
                    .iter()
                    .map(|q| TakeoffRow::Quantity(QuantityDrag::new(element.id.clone(), q.clone()))),
            );
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::QuantityItem;

    #[test]
    fn test_only_expanded_elements_list_quantities() {
        let elements = vec![
            Element::new("E001", "Wall 200", "Wall").with_quantities(vec![
                QuantityItem::new("Q001", "Count", 33.0, "EA"),
                QuantityItem::new("Q002", "Length", 65.1, "M"),
            ]),
            Element::new("E002", "Wall 500", "Wall").with_quantities(vec![QuantityItem::new("Q009", "Count", 12.0, "EA")]),
        ];
        let rows = takeoff_rows(&elements, &["E001"].into_iter().collect());
        let keys: Vec<_> = rows.iter().map(TakeoffRow::key).collect();
        assert_eq!(keys, vec!["E001", "E001-Q001", "E001-Q002", "E002"]);
        assert!(matches!(rows[0], TakeoffRow::Element { expanded: true, .. }));
        assert!(matches!(rows[3], TakeoffRow::Element { expanded: false, .. }));
    }
}
