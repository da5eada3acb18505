//! Decision tree model and the passes run over it before rendering.
//!
//! - [`node`]: the tree data model ([`TreeNode`], [`Split`], [`NodeId`])
//! - [`json`]: decoding/encoding the exported JSON shape
//! - [`source`]: the [`TreeSource`] collaborator and its adapters
//! - [`ids`]: breadth-first id assignment
//! - [`classes`]: class counting
//! - [`color`]: hue palette generation

pub mod classes;
pub mod color;
pub mod ids;
pub mod json;
pub mod node;
pub mod source;

pub use classes::{count_classes, distinct_classes};
pub use color::generate_color_brew;
pub use ids::{assign_ids, node_count, with_node_ids};
pub use json::{decode_tree, encode_tree};
pub use node::{InternalNode, LeafNode, NodeId, NodeType, Nodes, Split, SplitType, TreeNode};
pub use source::{JsonFile, JsonText, TreeSource, load_tree};
pub use treeviz_error::{Error, ErrorKind, Result};
