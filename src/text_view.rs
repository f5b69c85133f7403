use std::fmt::Display;

use crate::{
    layout::Layout,
    seg_tree::{Monoid, SegTree},
};


/// Draws the tree as text: one row per depth, each node in the column the layout
/// gives it, followed by the array line.
pub fn render<T: Monoid + Display>(tree: &SegTree<T>) -> String {
    let layout = Layout::of(tree.raw_nodes());
    let labels = layout
        .nodes()
        .iter()
        .map(|n| n.value.to_string())
        .collect::<Vec<_>>();
    let cell = labels.iter().map(|l| l.len()).max().unwrap_or(0) + 1;

    let mut rows = vec![String::new(); layout.max_depth() + 1];
    for (node, label) in layout.nodes().iter().zip(&labels) {
        let row = &mut rows[node.depth];
        let start = node.x * cell;
        while row.len() < start {
            row.push(' ');
        }
        row.push_str(&format!("{:>width$}", label, width = cell));
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(row.trim_end());
        out.push('\n');
    }

    let values = tree
        .values()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>();
    out.push_str(&format!("Array: [{}]\n", values.join(", ")));

    out
}
