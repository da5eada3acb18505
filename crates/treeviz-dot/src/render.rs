//! Tree traversal producing edge and node statements.

use treeviz_core::{NodeId, TreeNode};
use treeviz_error::{Error, Result};

use crate::label::{NodeLabelFormatter, NodeStatement};

/// Which side of a split an edge leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Split condition holds (left child).
    True,
    /// Split condition fails (right child).
    False,
}

impl Branch {
    pub fn head_label(self) -> &'static str {
        match self {
            Branch::True => "True",
            Branch::False => "False",
        }
    }

    /// Angle of the head label; opposite signs keep the two labels apart.
    pub fn label_angle(self) -> &'static str {
        match self {
            Branch::True => "45",
            Branch::False => "-45",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStatement {
    pub from: NodeId,
    pub to: NodeId,
    pub branch: Branch,
}

impl EdgeStatement {
    pub const LABEL_DISTANCE: &'static str = "2.5";

    pub fn attrs(&self) -> [(&'static str, &'static str); 3] {
        [
            ("labeldistance", Self::LABEL_DISTANCE),
            ("labelangle", self.branch.label_angle()),
            ("headlabel", self.branch.head_label()),
        ]
    }
}

/// Everything one render pass collected.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    /// Edges in traversal order.
    pub edges: Vec<EdgeStatement>,
    /// One statement per node, in first-visit order.
    pub nodes: Vec<NodeStatement>,
}

/// Walk the tree depth-first with an explicit stack.
///
/// Each popped internal node yields a `True` edge to its left child and a
/// `False` edge to its right child; both children are then pushed, left
/// first, so the right subtree is expanded next. Every node is formatted
/// exactly once: the root up front, every other node when its parent is
/// popped.
pub fn render_relations(
    root: &TreeNode,
    formatter: &NodeLabelFormatter<'_>,
) -> Result<Relations> {
    let mut relations = Relations::default();
    relations.nodes.push(formatter.format(root)?);

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let Some((left, right)) = node.children() else {
            continue;
        };
        let parent = node.id().ok_or_else(|| {
            Error::invalid_argument("node has no id; assign ids before rendering")
                .with_operation("dot::render_relations")
        })?;

        for (child, branch) in [(left, Branch::True), (right, Branch::False)] {
            let statement = formatter.format(child)?;
            relations.edges.push(EdgeStatement {
                from: parent,
                to: statement.id(),
                branch,
            });
            relations.nodes.push(statement);
            stack.push(child);
        }
    }

    Ok(relations)
}
