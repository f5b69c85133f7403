//! Node placement for drawing a segment tree.
//!
//! Nodes are placed by an in-order walk over the backing array: the left child is
//! visited, the node itself is emitted, then the right child is visited. A node's
//! column is the number of nodes emitted before it and its row is its depth.

#[cfg(test)]
mod tests;

/// Radius of a drawn node in pixels.
pub const NODE_RADIUS: i32 = 30;

/// Vertical space kept free below the tree for the array and status lines.
const BOTTOM_MARGIN: u32 = 100;

/// `NodeInfo` is one emitted node: its index in the backing array, its column `x`,
/// its `depth` and the value stored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo<T> {
    pub index: usize,
    pub x: usize,
    pub depth: usize,
    pub value: T,
}

/// `CanvasNode` is a node mapped onto a canvas, `center` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasNode<T> {
    pub index: usize,
    pub center: (i32, i32),
    pub value: T,
}

#[derive(Debug, Clone)]
pub struct Layout<T> {
    nodes: Vec<NodeInfo<T>>,
    /// backing index -> position in `nodes`
    positions: Vec<usize>,
}

impl<T: Copy> Layout<T> {
    pub fn of(tree: &[T]) -> Self {
        let mut nodes = Vec::with_capacity(tree.len());
        if !tree.is_empty() {
            let mut position = 0;
            place(tree, 0, 0, &mut position, &mut nodes);
        }

        let mut positions = vec![0; nodes.len()];
        for (emitted, node) in nodes.iter().enumerate() {
            positions[node.index] = emitted;
        }

        Self { nodes, positions }
    }

    /// Nodes in emission order.
    pub fn nodes(&self) -> &[NodeInfo<T>] {
        &self.nodes
    }

    pub fn max_x(&self) -> usize {
        self.nodes.iter().map(|n| n.x).max().unwrap_or(0)
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Position of backing index `index` in [`nodes`](Self::nodes).
    pub fn position(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    pub fn find(&self, index: usize) -> Option<&NodeInfo<T>> {
        self.position(index).map(|p| &self.nodes[p])
    }

    /// `(parent, child)` for every node but the root.
    pub fn edges(&self) -> Vec<(NodeInfo<T>, NodeInfo<T>)> {
        self.nodes
            .iter()
            .filter(|n| n.index > 0)
            .filter_map(|child| {
                self.find((child.index - 1) / 2)
                    .map(|parent| (*parent, *child))
            })
            .collect()
    }

    pub fn to_canvas(&self, width: u32, height: u32) -> Vec<CanvasNode<T>> {
        let (h, v) = self.spacing(width, height);

        self.nodes
            .iter()
            .map(|n| CanvasNode {
                index: n.index,
                center: (n.x as i32 * h + h, n.depth as i32 * v + v),
                value: n.value,
            })
            .collect()
    }

    /// Horizontal and vertical distance between neighbouring columns and rows.
    pub fn spacing(&self, width: u32, height: u32) -> (i32, i32) {
        let h = width / (self.max_x() as u32 + 2);
        let v = height.saturating_sub(BOTTOM_MARGIN) / (self.max_depth() as u32 + 2);
        (h as i32, v as i32)
    }
}

fn place<T: Copy>(
    tree: &[T],
    index: usize,
    depth: usize,
    position: &mut usize,
    nodes: &mut Vec<NodeInfo<T>>,
) {
    let left = index * 2 + 1;
    if left < tree.len() {
        place(tree, left, depth + 1, position, nodes);
    }

    nodes.push(NodeInfo {
        index,
        x: *position,
        depth,
        value: tree[index],
    });
    *position += 1;

    let right = index * 2 + 2;
    if right < tree.len() {
        place(tree, right, depth + 1, position, nodes);
    }
}
