//! Property-based invariant tests for the segment tree.
//!
//! Verifies:
//! 1. Range sums match a prefix-sum reference for every valid range
//! 2. Update sets exactly one position and moves the total by the delta
//! 3. Eliminate is update with zero
//! 4. Repeating an update leaves the backing array unchanged
//! 5. Backing length is `2 * next_power_of_two(n) - 1`
//! 6. Layout emits every backing slot once, columns in emission order

use proptest::prelude::*;
use segtree_visualizer::{layout::Layout, seg_tree::SegTree};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..=1_000_000, 1..64)
}

fn arb_values_and_pos() -> impl Strategy<Value = (Vec<i64>, usize)> {
    arb_values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len)
    })
}

fn prefix_sums(values: &[i64]) -> Vec<i64> {
    let mut sums = vec![0];
    for v in values {
        sums.push(sums.last().unwrap() + v);
    }
    sums
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn query_matches_prefix_sums(values in arb_values()) {
        let tree = SegTree::new(&values).unwrap();
        let sums = prefix_sums(&values);

        for left in 0..values.len() {
            for right in left..values.len() {
                prop_assert_eq!(tree.query(left, right).unwrap(), sums[right + 1] - sums[left]);
            }
        }
    }

    #[test]
    fn update_touches_one_position(
        (values, pos) in arb_values_and_pos(),
        value in -1_000_000i64..=1_000_000,
    ) {
        let mut tree = SegTree::new(&values).unwrap();
        let total = tree.query(0, values.len() - 1).unwrap();

        tree.update(pos, value).unwrap();

        prop_assert_eq!(tree.query(pos, pos).unwrap(), value);
        prop_assert_eq!(
            tree.query(0, values.len() - 1).unwrap(),
            total + value - values[pos]
        );
        for (i, &v) in values.iter().enumerate() {
            if i != pos {
                prop_assert_eq!(tree.get(i).unwrap(), v);
            }
        }
    }

    #[test]
    fn eliminate_is_update_zero((values, pos) in arb_values_and_pos()) {
        let mut eliminated = SegTree::new(&values).unwrap();
        let mut zeroed = eliminated.clone();

        eliminated.eliminate(pos).unwrap();
        zeroed.update(pos, 0).unwrap();

        prop_assert_eq!(eliminated.raw_nodes(), zeroed.raw_nodes());
        prop_assert_eq!(eliminated.logical_size(), values.len());
    }

    #[test]
    fn update_is_idempotent(
        (values, pos) in arb_values_and_pos(),
        value in -1_000_000i64..=1_000_000,
    ) {
        let mut tree = SegTree::new(&values).unwrap();
        tree.update(pos, value).unwrap();
        let once = tree.raw_nodes().to_vec();
        tree.update(pos, value).unwrap();

        prop_assert_eq!(tree.raw_nodes(), once.as_slice());
    }

    #[test]
    fn backing_is_padded(values in arb_values()) {
        let tree = SegTree::new(&values).unwrap();
        let padded = values.len().next_power_of_two();

        prop_assert_eq!(tree.padded_size(), padded);
        prop_assert_eq!(tree.raw_nodes().len(), padded * 2 - 1);
        prop_assert_eq!(tree.raw_nodes()[0], values.iter().sum::<i64>());
    }

    #[test]
    fn layout_covers_backing(values in arb_values()) {
        let tree = SegTree::new(&values).unwrap();
        let layout = Layout::of(tree.raw_nodes());

        let mut seen = vec![false; tree.raw_nodes().len()];
        for (emitted, node) in layout.nodes().iter().enumerate() {
            prop_assert_eq!(node.x, emitted);
            prop_assert!(!seen[node.index]);
            seen[node.index] = true;
        }
        prop_assert!(seen.into_iter().all(|s| s));
    }
}
