//! Decision tree rendering to DOT format.
//!
//! A fitted tree is numbered breadth-first, its classes are mapped to evenly
//! spaced hues, and a depth-first walk emits one `True`/`False` edge pair per
//! split plus one styled statement per node.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT escaping and the [`DotBuilder`]
//! - [`options`]: [`RenderOptions`] (naming inputs and style flags)
//! - [`label`]: [`NodeLabelFormatter`] for per-node labels and colors
//! - [`render`]: the traversal producing [`Relations`]
//! - [`export`]: the end-to-end pipeline
//! - [`raster`]: image output through an external layout engine

pub mod dot;
pub mod export;
pub mod label;
pub mod options;
pub mod raster;
pub mod render;

pub use dot::DotBuilder;
pub use export::{assemble, export_graphviz, export_tree, tree_json};
pub use label::{NodeLabelFormatter, NodeStatement};
pub use options::RenderOptions;
pub use raster::{GraphvizCommand, ImageFormat, Rasterizer, plot_tree, render_image};
pub use render::{Branch, EdgeStatement, Relations, render_relations};
