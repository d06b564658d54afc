//! Property tests for the tree renderer and the mapping operation.
//!
//! 1. Visible rows are exactly the nodes reachable through expanded parents
//! 2. Collapsing a visible node removes exactly its visible subtree
//! 3. Toggling the same id twice restores the expand set
//! 4. Mapping a leaf changes only that leaf and shares untouched subtrees
//! 5. Mapping an unknown id leaves the tree as it was

use std::sync::Arc;

use bim_schedule::{visible_rows, BqItem, BqTree, ExpandedSet, MappingError, QuantityDrag, QuantityItem};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Tree shape without data; ids are assigned in pre-order afterwards
#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn shape_strategy() -> impl Strategy<Value = Shape> {
    Just(Shape(vec![])).prop_recursive(4, 40, 4, |inner| prop::collection::vec(inner, 0..4).prop_map(Shape))
}

fn build(shapes: &[Shape], level: u32, next: &mut usize) -> Vec<BqItem> {
    shapes
        .iter()
        .map(|shape| {
            let id = format!("N{next}");
            *next += 1;
            let children = build(&shape.0, level + 1, next);
            BqItem::new(id.clone(), id, "node", level).with_children(children)
        })
        .collect()
}

fn tree_strategy() -> impl Strategy<Value = BqTree> {
    prop::collection::vec(shape_strategy(), 1..4).prop_map(|shapes| {
        let mut next = 0;
        BqTree::new(build(&shapes, 0, &mut next))
    })
}

/// A tree plus a random subset of its ids marked expanded
fn tree_and_expanded() -> impl Strategy<Value = (BqTree, ExpandedSet)> {
    (tree_strategy(), prop::collection::vec(any::<bool>(), 64)).prop_map(|(tree, mask)| {
        let expanded: ExpandedSet = tree
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask[idx % mask.len()])
            .map(|(_, item)| item.id.clone())
            .collect();
        (tree, expanded)
    })
}

fn reachable(nodes: &[Arc<BqItem>], expanded: &ExpandedSet) -> usize {
    nodes
        .iter()
        .map(|node| {
            let below = if expanded.contains(&node.id) {
                reachable(&node.children, expanded)
            } else {
                0
            };
            1 + below
        })
        .sum()
}

fn drag(value: f64) -> QuantityDrag {
    QuantityDrag::new("E001", QuantityItem::new("Q-prop", "Net Volume", value, "M3"))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_trees_are_valid(tree in tree_strategy()) {
        prop_assert!(tree.validate().is_ok());
    }

    #[test]
    fn visible_rows_match_reachable_nodes((tree, expanded) in tree_and_expanded()) {
        let rows = visible_rows(tree.roots(), &expanded);
        prop_assert_eq!(rows.len(), reachable(tree.roots(), &expanded));
        for row in &rows {
            prop_assert_eq!(row.has_children, !row.node.children.is_empty());
            prop_assert_eq!(row.node.level as usize, row.depth);
        }
    }

    #[test]
    fn collapsing_removes_exactly_the_subtree((tree, expanded) in tree_and_expanded(), pick in any::<prop::sample::Index>()) {
        let before = visible_rows(tree.roots(), &expanded);
        let open: Vec<usize> = before
            .iter()
            .enumerate()
            .filter(|(_, row)| row.expanded)
            .map(|(idx, _)| idx)
            .collect();
        prop_assume!(!open.is_empty());

        let at = open[pick.index(open.len())];
        let depth = before[at].depth;
        let end = before[at + 1..]
            .iter()
            .position(|row| row.depth <= depth)
            .map_or(before.len(), |offset| at + 1 + offset);

        let mut collapsed = expanded.clone();
        prop_assert!(!collapsed.toggle(&before[at].node.id));
        let after = visible_rows(tree.roots(), &collapsed);

        let expected: Vec<&str> = before[..=at]
            .iter()
            .chain(&before[end..])
            .map(|row| row.node.id.as_str())
            .collect();
        let actual: Vec<&str> = after.iter().map(|row| row.node.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn toggle_twice_is_identity((tree, expanded) in tree_and_expanded(), pick in any::<prop::sample::Index>()) {
        let ids: Vec<String> = tree.iter().map(|item| item.id.clone()).collect();
        let id = &ids[pick.index(ids.len())];
        let mut toggled = expanded.clone();
        toggled.toggle(id);
        toggled.toggle(id);
        prop_assert_eq!(toggled, expanded);
    }

    #[test]
    fn mapping_touches_only_the_target(tree in tree_strategy(), pick in any::<prop::sample::Index>(), value in 0.0f64..10_000.0) {
        let leaves: Vec<String> = tree.iter().filter(|item| item.is_leaf()).map(|item| item.id.clone()).collect();
        let target = &leaves[pick.index(leaves.len())];

        let mapped = tree.map_quantity(&drag(value), target).unwrap();
        prop_assert_eq!(mapped.len(), tree.len());

        for (old, new) in tree.iter().zip(mapped.iter()) {
            prop_assert_eq!(&old.id, &new.id);
            if &old.id == target {
                prop_assert!(new.mapped);
                prop_assert_eq!(new.mapped_quantity_id.as_deref(), Some("Q-prop"));
                prop_assert_eq!(new.quantity, value);
                prop_assert_eq!(&new.code, &old.code);
                prop_assert_eq!(new.level, old.level);
            } else if !contains(old, target) {
                // Outside the path to the target: same allocation
                prop_assert!(Arc::ptr_eq(old, new));
            } else {
                // Ancestor: rebuilt, own fields unchanged
                prop_assert_eq!(old.quantity, new.quantity);
                prop_assert_eq!(old.mapped, new.mapped);
                prop_assert_eq!(old.children.len(), new.children.len());
            }
        }
    }

    #[test]
    fn mapping_unknown_id_is_rejected(tree in tree_strategy()) {
        let result = tree.map_quantity(&drag(1.0), "missing");
        prop_assert_eq!(result, Err(MappingError::NotFound("missing".to_string())));

        let (same, err) = tree.apply_mapping(&drag(1.0), "missing");
        prop_assert!(err.is_some());
        prop_assert_eq!(same, tree);
    }
}

fn contains(node: &BqItem, id: &str) -> bool {
    node.id == id || node.children.iter().any(|child| contains(child, id))
}
