//! End-to-end export: tree source in, DOT text or JSON out.

use tracing::debug;
use treeviz_core::{
    TreeNode, TreeSource, assign_ids, count_classes, encode_tree, generate_color_brew, load_tree,
};
use treeviz_error::Result;

use crate::dot::DotBuilder;
use crate::label::NodeLabelFormatter;
use crate::options::RenderOptions;
use crate::render::{Relations, render_relations};

/// Fetch a tree from `source` and render it as a DOT digraph.
pub fn export_graphviz<S: TreeSource + ?Sized>(
    source: &S,
    options: &RenderOptions,
) -> Result<String> {
    let tree = load_tree(source)?;
    export_tree(tree, options)
}

/// Render an already decoded tree. Ids are (re)assigned breadth-first.
pub fn export_tree(mut tree: TreeNode, options: &RenderOptions) -> Result<String> {
    let nodes = assign_ids(&mut tree);
    let num_classes = count_classes(&tree);
    let color_brew = generate_color_brew(num_classes)
        .map_err(|err| err.with_operation("dot::export_tree"))?;
    debug!(nodes, num_classes, "rendering tree");

    let formatter = NodeLabelFormatter::new(options, &color_brew);
    let relations = render_relations(&tree, &formatter)?;
    Ok(assemble(&relations, options))
}

/// Lay out the final digraph: default node style, then edges, then nodes.
pub fn assemble(relations: &Relations, options: &RenderOptions) -> String {
    let mut builder = DotBuilder::new("Tree");

    let style = options.node_style();
    let mut defaults = vec![("shape", "box")];
    if let Some(style) = style.as_deref() {
        defaults.push(("style", style));
    }
    builder.node_style(&defaults).start_subgraph("body");

    for edge in &relations.edges {
        builder.edge_with_attrs(&edge.from.to_string(), &edge.to.to_string(), &edge.attrs());
    }
    if !relations.edges.is_empty() {
        builder.blank();
    }
    for node in &relations.nodes {
        let attrs: Vec<(&str, &str)> = node.attrs().iter().map(|(k, v)| (*k, v.as_str())).collect();
        builder.node_full(&node.id().to_string(), &attrs);
    }

    builder.end_subgraph();
    builder.build()
}

/// The tree as pretty-printed JSON, optionally numbered breadth-first.
pub fn tree_json<S: TreeSource + ?Sized>(source: &S, with_node_ids: bool) -> Result<String> {
    let mut tree = load_tree(source)?;
    if with_node_ids {
        assign_ids(&mut tree);
    }
    encode_tree(&tree)
}
