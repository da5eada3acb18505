//! Decision tree data model.
//!
//! A fitted tree is a strictly owned binary tree: every [`InternalNode`] owns
//! exactly two children and a [`LeafNode`] owns none. Node ids are absent until
//! [`assign_ids`](crate::assign_ids) numbers the tree breadth-first.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Breadth-first position of a node, `0` being the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Discriminant of a node as written in the exported JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Internal,
    Leaf,
}

/// How an internal node routes samples to its left child.
#[derive(Debug, Clone, PartialEq)]
pub enum Split {
    /// `feature <= threshold` goes left.
    Continuous { threshold: f64 },
    /// Feature value in `left_categories` goes left.
    Categorical { left_categories: Vec<usize> },
}

impl Split {
    pub fn continuous(threshold: f64) -> Self {
        Split::Continuous { threshold }
    }

    pub fn categorical(left_categories: impl Into<Vec<usize>>) -> Self {
        Split::Categorical {
            left_categories: left_categories.into(),
        }
    }

    pub fn split_type(&self) -> SplitType {
        match self {
            Split::Continuous { .. } => SplitType::Continuous,
            Split::Categorical { .. } => SplitType::Categorical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    Continuous,
    Categorical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub id: Option<NodeId>,
    /// Predicted class index.
    pub prediction: usize,
    pub impurity: f64,
}

impl LeafNode {
    pub fn new(prediction: usize, impurity: f64) -> Self {
        Self {
            id: None,
            prediction,
            impurity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InternalNode {
    pub id: Option<NodeId>,
    /// Majority class at this node.
    pub prediction: usize,
    pub impurity: f64,
    pub feature_index: usize,
    pub split: Split,
    pub gain: f64,
    pub left: Box<TreeNode>,
    pub right: Box<TreeNode>,
}

impl InternalNode {
    /// Create a split with zeroed statistics; use the `with_*` methods to fill them in.
    pub fn new(feature_index: usize, split: Split, left: TreeNode, right: TreeNode) -> Self {
        Self {
            id: None,
            prediction: 0,
            impurity: 0.0,
            feature_index,
            split,
            gain: 0.0,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn with_prediction(mut self, prediction: usize) -> Self {
        self.prediction = prediction;
        self
    }

    pub fn with_impurity(mut self, impurity: f64) -> Self {
        self.impurity = impurity;
        self
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}

/// One node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Leaf(LeafNode),
    Internal(InternalNode),
}

impl From<LeafNode> for TreeNode {
    fn from(leaf: LeafNode) -> Self {
        TreeNode::Leaf(leaf)
    }
}

impl From<InternalNode> for TreeNode {
    fn from(internal: InternalNode) -> Self {
        TreeNode::Internal(internal)
    }
}

impl TreeNode {
    pub fn leaf(prediction: usize, impurity: f64) -> Self {
        TreeNode::Leaf(LeafNode::new(prediction, impurity))
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            TreeNode::Leaf(_) => NodeType::Leaf,
            TreeNode::Internal(_) => NodeType::Internal,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    pub fn id(&self) -> Option<NodeId> {
        match self {
            TreeNode::Leaf(leaf) => leaf.id,
            TreeNode::Internal(internal) => internal.id,
        }
    }

    pub fn set_id(&mut self, id: NodeId) {
        match self {
            TreeNode::Leaf(leaf) => leaf.id = Some(id),
            TreeNode::Internal(internal) => internal.id = Some(id),
        }
    }

    pub fn prediction(&self) -> usize {
        match self {
            TreeNode::Leaf(leaf) => leaf.prediction,
            TreeNode::Internal(internal) => internal.prediction,
        }
    }

    pub fn impurity(&self) -> f64 {
        match self {
            TreeNode::Leaf(leaf) => leaf.impurity,
            TreeNode::Internal(internal) => internal.impurity,
        }
    }

    /// Left and right child, or `None` for a leaf.
    pub fn children(&self) -> Option<(&TreeNode, &TreeNode)> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Internal(internal) => Some((&*internal.left, &*internal.right)),
        }
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }
}

/// Depth-first iterator returned by [`TreeNode::iter`].
pub struct Nodes<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some((left, right)) = node.children() {
            // right first so the left subtree is visited first
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}
