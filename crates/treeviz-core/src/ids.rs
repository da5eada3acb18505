//! Breadth-first node numbering.

use std::collections::VecDeque;

use tracing::debug;

use crate::node::{NodeId, TreeNode};

/// Number every node breadth-first, left before right, starting at the root
/// with `0`. Existing ids are overwritten. Returns the number of nodes.
///
/// Ids depend only on the tree shape, so re-running on an unchanged tree
/// yields the same ids.
pub fn assign_ids(root: &mut TreeNode) -> usize {
    let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
    queue.push_back(root);

    let mut next = 0u32;
    while let Some(node) = queue.pop_front() {
        node.set_id(NodeId::new(next));
        next += 1;

        if let TreeNode::Internal(internal) = node {
            queue.push_back(&mut internal.left);
            queue.push_back(&mut internal.right);
        }
    }

    debug!(nodes = next, "assigned node ids");
    next as usize
}

/// Owned variant of [`assign_ids`] for call chains.
pub fn with_node_ids(mut root: TreeNode) -> TreeNode {
    assign_ids(&mut root);
    root
}

/// Total number of nodes, leaves included.
pub fn node_count(root: &TreeNode) -> usize {
    root.iter().count()
}
