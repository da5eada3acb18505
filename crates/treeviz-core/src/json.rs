//! JSON codec for the exported tree structure.
//!
//! The exporter writes one object per node:
//!
//! ```json
//! {
//!   "nodeType": "internal",
//!   "prediction": 0.0,
//!   "impurity": 0.48,
//!   "featureIndex": 2,
//!   "splitType": "continuous",
//!   "threshold": 1.5,
//!   "gain": 0.1,
//!   "leftChild": { "nodeType": "leaf", "prediction": 0.0, "impurity": 0.0 },
//!   "rightChild": { "nodeType": "leaf", "prediction": 1.0, "impurity": 0.0 }
//! }
//! ```
//!
//! Categorical splits carry `leftCategories` instead of `threshold`. Class and
//! category indices may be written as doubles (`1.0`); they must be integral.

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use treeviz_error::{Error, Result};

use crate::node::{InternalNode, LeafNode, NodeId, NodeType, Split, SplitType, TreeNode};

/// Decode a tree from its exported JSON text.
pub fn decode_tree(json: &str) -> Result<TreeNode> {
    serde_json::from_str(json).map_err(|err| {
        let mut error =
            Error::deserialization_failed(err.to_string()).with_operation("core::decode_tree");
        // serde_json reports line 0 for errors raised after the whole value was read
        if err.line() != 0 {
            error = error
                .with_context("line", err.line().to_string())
                .with_context("column", err.column().to_string());
        }
        error.set_source(err)
    })
}

/// Encode a tree as pretty-printed JSON; ids are written only once assigned.
pub fn encode_tree(root: &TreeNode) -> Result<String> {
    serde_json::to_string_pretty(root).map_err(|err| {
        Error::serialization_failed(err.to_string())
            .with_operation("core::encode_tree")
            .set_source(err)
    })
}

/// Non-negative integer that may arrive as `3` or `3.0`.
#[derive(Debug, Clone, Copy)]
struct Index(usize);

struct IndexVisitor;

impl<'de> Visitor<'de> for IndexVisitor {
    type Value = Index;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integral number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Index, E> {
        usize::try_from(v)
            .map(Index)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Index, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Index, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
            Ok(Index(v as usize))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Index {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(IndexVisitor)
    }
}

/// Wire shape of one node before the internal/leaf invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    node_type: NodeType,
    prediction: Index,
    impurity: f64,
    id: Option<u32>,
    feature_index: Option<Index>,
    split_type: Option<SplitType>,
    threshold: Option<f64>,
    left_categories: Option<Vec<Index>>,
    gain: Option<f64>,
    left_child: Option<Box<TreeNode>>,
    right_child: Option<Box<TreeNode>>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        Error::deserialization_failed(format!("internal node is missing `{field}`"))
            .with_context("field", field)
    })
}

impl TryFrom<RawNode> for TreeNode {
    type Error = Error;

    fn try_from(raw: RawNode) -> Result<Self> {
        let id = raw.id.map(NodeId::new);
        if raw.node_type == NodeType::Leaf {
            return Ok(TreeNode::Leaf(LeafNode {
                id,
                prediction: raw.prediction.0,
                impurity: raw.impurity,
            }));
        }

        let split = match required(raw.split_type, "splitType")? {
            SplitType::Continuous => Split::Continuous {
                threshold: required(raw.threshold, "threshold")?,
            },
            SplitType::Categorical => Split::Categorical {
                left_categories: required(raw.left_categories, "leftCategories")?
                    .into_iter()
                    .map(|c| c.0)
                    .collect(),
            },
        };

        Ok(TreeNode::Internal(InternalNode {
            id,
            prediction: raw.prediction.0,
            impurity: raw.impurity,
            feature_index: required(raw.feature_index, "featureIndex")?.0,
            split,
            gain: required(raw.gain, "gain")?,
            left: required(raw.left_child, "leftChild")?,
            right: required(raw.right_child, "rightChild")?,
        }))
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawNode::deserialize(deserializer)?;
        TreeNode::try_from(raw).map_err(|err| de::Error::custom(err.message()))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeRepr<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    node_type: NodeType,
    prediction: usize,
    impurity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    split_type: Option<SplitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_categories: Option<&'a [usize]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left_child: Option<&'a TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right_child: Option<&'a TreeNode>,
}

impl<'a> From<&'a TreeNode> for NodeRepr<'a> {
    fn from(node: &'a TreeNode) -> Self {
        let mut repr = NodeRepr {
            id: node.id().map(NodeId::as_u32),
            node_type: node.node_type(),
            prediction: node.prediction(),
            impurity: node.impurity(),
            feature_index: None,
            split_type: None,
            threshold: None,
            left_categories: None,
            gain: None,
            left_child: None,
            right_child: None,
        };

        if let TreeNode::Internal(internal) = node {
            repr.feature_index = Some(internal.feature_index);
            repr.split_type = Some(internal.split.split_type());
            match &internal.split {
                Split::Continuous { threshold } => repr.threshold = Some(*threshold),
                Split::Categorical { left_categories } => {
                    repr.left_categories = Some(left_categories.as_slice())
                }
            }
            repr.gain = Some(internal.gain);
            repr.left_child = Some(&*internal.left);
            repr.right_child = Some(&*internal.right);
        }

        repr
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        NodeRepr::from(self).serialize(serializer)
    }
}
