use std::env;

use anyhow::{ensure, Result};

use segtree_visualizer::{command::parse_array_input, layout::Layout, seg_tree::SegTree};

fn main() -> Result<()> {
    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| segtree_visualizer::config::DEFAULT_INITIAL.to_string());
    let values = parse_array_input(&input);
    ensure!(!values.is_empty(), "expected an array like 1,2,3 but found '{}'", input);

    let tree = SegTree::new(&values)?;
    println!(
        "# logical size {}, padded size {}, {} nodes",
        tree.logical_size(),
        tree.padded_size(),
        tree.raw_nodes().len()
    );
    println!("index\tx\tdepth\tvalue");

    for node in Layout::of(tree.raw_nodes()).nodes() {
        println!("{}\t{}\t{}\t{}", node.index, node.x, node.depth, node.value);
    }

    Ok(())
}
