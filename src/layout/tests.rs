use super::{Layout, NodeInfo};
use crate::seg_tree::SegTree;

#[test]
fn in_order_positions() {
    let tree = SegTree::new(&[1i64, 2, 3]).unwrap();
    // [6, 3, 3, 1, 2, 0, 0]
    let layout = Layout::of(tree.raw_nodes());

    let order = layout.nodes().iter().map(|n| n.index).collect::<Vec<_>>();
    assert_eq!(order, vec![3, 1, 4, 0, 5, 2, 6]);

    let depths = layout.nodes().iter().map(|n| n.depth).collect::<Vec<_>>();
    assert_eq!(depths, vec![2, 1, 2, 0, 2, 1, 2]);

    assert_eq!(
        layout.find(0),
        Some(&NodeInfo {
            index: 0,
            x: 3,
            depth: 0,
            value: 6
        })
    );
    assert_eq!(layout.max_x(), 6);
    assert_eq!(layout.max_depth(), 2);
}

#[test]
fn every_slot_once() {
    for len in 1..=17 {
        let values = (0..len as i64).collect::<Vec<_>>();
        let tree = SegTree::new(&values).unwrap();
        let layout = Layout::of(tree.raw_nodes());

        assert_eq!(layout.nodes().len(), tree.raw_nodes().len());
        for (emitted, node) in layout.nodes().iter().enumerate() {
            assert_eq!(node.x, emitted);
            assert_eq!(node.value, tree.raw_nodes()[node.index]);
            // distance from the root in a heap-indexed tree
            let depth = (usize::BITS - (node.index + 1).leading_zeros() - 1) as usize;
            assert_eq!(node.depth, depth);
        }
    }
}

#[test]
fn parents_sit_between_children() {
    let tree = SegTree::new(&[1i64, 6, 4, 7, 2, 8]).unwrap();
    let layout = Layout::of(tree.raw_nodes());
    let edges = layout.edges();

    assert_eq!(edges.len(), tree.raw_nodes().len() - 1);
    for (parent, child) in edges {
        assert_eq!(parent.depth + 1, child.depth);
        if child.index % 2 == 1 {
            assert!(child.x < parent.x);
        } else {
            assert!(parent.x < child.x);
        }
    }
}

#[test]
fn canvas_mapping() {
    let layout = Layout::of(&[6i64, 3, 3]);
    // columns 0..=2, depth 0..=1
    let canvas = layout.to_canvas(400, 500);
    assert_eq!(layout.spacing(400, 500), (100, 133));

    let centers = canvas.iter().map(|n| (n.index, n.center)).collect::<Vec<_>>();
    assert_eq!(
        centers,
        vec![(1, (100, 266)), (0, (200, 133)), (2, (300, 266))]
    );

    // too short a canvas collapses rows instead of underflowing
    assert_eq!(layout.spacing(400, 50), (100, 0));
}

#[test]
fn empty_layout() {
    let layout = Layout::<i64>::of(&[]);
    assert!(layout.nodes().is_empty());
    assert!(layout.edges().is_empty());
    assert_eq!(layout.max_x(), 0);
    assert_eq!(layout.max_depth(), 0);
}

#[test]
fn positions_follow_emission_order() {
    let tree = SegTree::new(&[1i64, 6, 4, 7, 2, 8]).unwrap();
    let layout = Layout::of(tree.raw_nodes());

    for index in 0..tree.raw_nodes().len() {
        let position = layout.position(index).unwrap();
        assert_eq!(layout.nodes()[position].index, index);
        assert_eq!(layout.find(index).map(|n| n.x), Some(position));
    }
    assert_eq!(layout.position(tree.raw_nodes().len()), None);
    assert_eq!(layout.find(15), None);
}
