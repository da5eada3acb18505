//! Per-node label text and style attributes.

use std::fmt;

use tracing::debug;
use treeviz_core::{InternalNode, NodeId, Split, TreeNode};
use treeviz_error::{Error, Result};

use crate::dot::write_statement;
use crate::options::RenderOptions;

/// Category values per label line in a categorical split.
const CATEGORIES_PER_LINE: usize = 5;

/// Attributes of one node, rendered as `<id> [key="value", ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStatement {
    id: NodeId,
    attrs: Vec<(&'static str, String)>,
}

impl NodeStatement {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    /// Look up one attribute value (unescaped).
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn label(&self) -> Option<&str> {
        self.attr("label")
    }
}

impl fmt::Display for NodeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs: Vec<(&str, &str)> = self.attrs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let mut out = String::new();
        write_statement(&mut out, &self.id.to_string(), &attrs);
        f.write_str(&out)
    }
}

/// Resolves display names and styles for tree nodes.
pub struct NodeLabelFormatter<'a> {
    options: &'a RenderOptions,
    color_brew: &'a [f64],
}

impl<'a> NodeLabelFormatter<'a> {
    pub fn new(options: &'a RenderOptions, color_brew: &'a [f64]) -> Self {
        Self {
            options,
            color_brew,
        }
    }

    /// Build the statement for one node. The node must already carry an id.
    pub fn format(&self, node: &TreeNode) -> Result<NodeStatement> {
        let id = node_id(node)?;
        let mut attrs = Vec::with_capacity(3);

        if node.is_leaf() && self.options.round_leaves {
            attrs.push(("shape", "ellipse".to_string()));
        }
        attrs.push(("label", self.label(id, node)));
        if self.options.filled {
            attrs.push(("fillcolor", self.fill_color(node)?));
        }

        Ok(NodeStatement { id, attrs })
    }

    /// Multi-line label text: id, split rule, impurity, gain, prediction.
    pub fn label(&self, id: NodeId, node: &TreeNode) -> String {
        let mut lines = vec![format!("Node ID {id}")];
        if let TreeNode::Internal(internal) = node {
            lines.push(self.split_description(internal));
        }
        lines.push(format!("Impurity = {:.4}", node.impurity()));
        if let TreeNode::Internal(internal) = node {
            lines.push(format!("Gain = {:.4}", internal.gain));
        }
        lines.push(format!(
            "Prediction = {}",
            self.class_name(node.prediction())
        ));
        lines.join("\n")
    }

    pub fn class_name(&self, prediction: usize) -> String {
        match lookup(&self.options.class_names, prediction) {
            Some(name) => name.to_string(),
            None => format!("Class #{prediction}"),
        }
    }

    pub fn feature_name(&self, feature_index: usize) -> String {
        match lookup(&self.options.feature_names, feature_index) {
            Some(name) => name.to_string(),
            None => format!("Feature #{feature_index}"),
        }
    }

    /// `<feature> <= <threshold>` or `<feature> in {<categories>}`.
    pub fn split_description(&self, internal: &InternalNode) -> String {
        let feature = self.feature_name(internal.feature_index);
        match &internal.split {
            Split::Continuous { threshold } => format!("{feature} <= {threshold:.4}"),
            Split::Categorical { left_categories } => {
                match self.category_labels(internal.feature_index, left_categories) {
                    Some(labels) => format!("{feature} in {{{}}}", chunk_lines(&labels)),
                    None => {
                        let raw: Vec<String> =
                            left_categories.iter().map(ToString::to_string).collect();
                        format!("{feature} in categories# {{{}}}", chunk_lines(&raw))
                    }
                }
            }
        }
    }

    /// Labels for every category, or `None` if any of them is unknown.
    fn category_labels(&self, feature_index: usize, categories: &[usize]) -> Option<Vec<&'a str>> {
        let key = match lookup(&self.options.feature_names, feature_index) {
            Some(name) => name.to_string(),
            None => feature_index.to_string(),
        };
        let labels = self.options.category_names.as_ref()?.get(&key)?;
        let resolved: Option<Vec<&'a str>> = categories
            .iter()
            .map(|&c| labels.get(c).map(String::as_str))
            .collect();
        if resolved.is_none() {
            debug!(feature = %key, "category index without a label; using raw indices");
        }
        resolved
    }

    /// `h,s,v` with the class hue and `1 - impurity` saturation.
    fn fill_color(&self, node: &TreeNode) -> Result<String> {
        let prediction = node.prediction();
        let hue = self.color_brew.get(prediction).ok_or_else(|| {
            Error::invalid_argument(format!(
                "class {prediction} has no hue in a brew of {} colors",
                self.color_brew.len()
            ))
            .with_operation("dot::NodeLabelFormatter::format")
        })?;
        let saturation = 1.0 - node.impurity();
        Ok(format!("{hue:.4},{saturation:.4},{:.4}", 1.0))
    }
}

fn node_id(node: &TreeNode) -> Result<NodeId> {
    node.id().ok_or_else(|| {
        Error::invalid_argument("node has no id; assign ids before rendering")
            .with_operation("dot::NodeLabelFormatter::format")
    })
}

fn lookup(names: &Option<Vec<String>>, index: usize) -> Option<&str> {
    let names = names.as_ref()?;
    let name = names.get(index);
    if name.is_none() {
        debug!(index, len = names.len(), "name list too short; using index");
    }
    name.map(String::as_str)
}

/// Comma-join values, five per line.
fn chunk_lines<S: AsRef<str>>(values: &[S]) -> String {
    values
        .chunks(CATEGORIES_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(",")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BREW: [f64; 2] = [0.0, 0.5];

    fn with_id(mut node: TreeNode, id: u32) -> TreeNode {
        node.set_id(NodeId::new(id));
        node
    }

    fn continuous_node() -> TreeNode {
        let node = InternalNode::new(
            2,
            Split::continuous(1.5),
            TreeNode::leaf(0, 0.0),
            TreeNode::leaf(1, 0.0),
        )
        .with_impurity(0.32)
        .with_gain(0.1)
        .with_prediction(0);
        with_id(node.into(), 0)
    }

    fn categorical_node(categories: Vec<usize>) -> TreeNode {
        let node = InternalNode::new(
            1,
            Split::categorical(categories),
            TreeNode::leaf(0, 0.0),
            TreeNode::leaf(1, 0.0),
        )
        .with_impurity(0.5)
        .with_gain(0.25)
        .with_prediction(1);
        with_id(node.into(), 3)
    }

    #[test]
    fn test_continuous_label_without_names() {
        let options = RenderOptions::default();
        let stmt = NodeLabelFormatter::new(&options, &BREW)
            .format(&continuous_node())
            .unwrap();

        assert_eq!(
            stmt.label().unwrap(),
            "Node ID 0\nFeature #2 <= 1.5000\nImpurity = 0.3200\nGain = 0.1000\nPrediction = Class #0"
        );
        assert_eq!(stmt.attr("fillcolor"), Some("0.0000,0.6800,1.0000"));
        assert_eq!(stmt.attr("shape"), None);
    }

    #[test]
    fn test_names_are_used() {
        let options = RenderOptions::new()
            .with_feature_names(["sepal", "petal", "stem"])
            .with_class_names(["setosa", "virginica"]);
        let stmt = NodeLabelFormatter::new(&options, &BREW)
            .format(&continuous_node())
            .unwrap();

        let label = stmt.label().unwrap();
        assert!(label.contains("stem <= 1.5000"), "{label}");
        assert!(label.ends_with("Prediction = setosa"), "{label}");
    }

    #[test]
    fn test_short_name_lists_fall_back_to_indices() {
        let options = RenderOptions::new()
            .with_feature_names(["only"])
            .with_class_names(Vec::<String>::new());
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        assert_eq!(formatter.feature_name(2), "Feature #2");
        assert_eq!(formatter.class_name(1), "Class #1");
    }

    #[test]
    fn test_leaf_shape_follows_round_leaves() {
        let leaf = with_id(TreeNode::leaf(1, 0.25), 4);

        let options = RenderOptions::default();
        let stmt = NodeLabelFormatter::new(&options, &BREW).format(&leaf).unwrap();
        assert_eq!(stmt.attr("shape"), Some("ellipse"));
        assert_eq!(
            stmt.label(),
            Some("Node ID 4\nImpurity = 0.2500\nPrediction = Class #1")
        );
        assert_eq!(stmt.attr("fillcolor"), Some("0.5000,0.7500,1.0000"));

        let options = RenderOptions::default().with_round_leaves(false);
        let stmt = NodeLabelFormatter::new(&options, &BREW).format(&leaf).unwrap();
        assert_eq!(stmt.attr("shape"), None);
    }

    #[test]
    fn test_unfilled_has_no_color() {
        let options = RenderOptions::default().with_filled(false);
        let stmt = NodeLabelFormatter::new(&options, &[])
            .format(&continuous_node())
            .unwrap();
        assert_eq!(stmt.attr("fillcolor"), None);
    }

    #[test]
    fn test_raw_categories_chunked_by_five() {
        let options = RenderOptions::default();
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        let TreeNode::Internal(node) = categorical_node(vec![0, 1, 2, 3, 4, 5, 6]) else {
            unreachable!()
        };
        assert_eq!(
            formatter.split_description(&node),
            "Feature #1 in categories# {0,1,2,3,4\n5,6}"
        );
    }

    #[test]
    fn test_named_categories() {
        let options = RenderOptions::new()
            .with_feature_names(["size", "color"])
            .with_category_names("color", ["red", "green", "blue"]);
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        let TreeNode::Internal(node) = categorical_node(vec![0, 2]) else {
            unreachable!()
        };
        assert_eq!(formatter.split_description(&node), "color in {red,blue}");
    }

    #[test]
    fn test_categories_keyed_by_index_without_feature_names() {
        let options = RenderOptions::new().with_category_names("1", ["a", "b"]);
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        let TreeNode::Internal(node) = categorical_node(vec![1]) else {
            unreachable!()
        };
        assert_eq!(formatter.split_description(&node), "Feature #1 in {b}");
    }

    #[test]
    fn test_unknown_category_falls_back_for_whole_list() {
        let options = RenderOptions::new()
            .with_feature_names(["size", "color"])
            .with_category_names("color", ["red"]);
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        let TreeNode::Internal(node) = categorical_node(vec![0, 2]) else {
            unreachable!()
        };
        assert_eq!(
            formatter.split_description(&node),
            "color in categories# {0,2}"
        );
    }

    #[test]
    fn test_feature_without_category_entry_uses_raw_indices() {
        let options = RenderOptions::new()
            .with_feature_names(["size", "f"])
            .with_category_names("other", ["x", "y", "z"]);
        let formatter = NodeLabelFormatter::new(&options, &BREW);
        let TreeNode::Internal(node) = categorical_node(vec![1, 2]) else {
            unreachable!()
        };
        assert_eq!(formatter.split_description(&node), "f in categories# {1,2}");
    }

    #[test]
    fn test_statement_display_escapes_label() {
        let options = RenderOptions::default().with_filled(false);
        let leaf = with_id(TreeNode::leaf(0, 0.0), 1);
        let stmt = NodeLabelFormatter::new(&options, &BREW).format(&leaf).unwrap();
        assert_eq!(
            stmt.to_string(),
            r#"1 [shape="ellipse", label="Node ID 1\nImpurity = 0.0000\nPrediction = Class #0"]"#
        );
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let options = RenderOptions::default();
        let err = NodeLabelFormatter::new(&options, &BREW)
            .format(&TreeNode::leaf(0, 0.0))
            .unwrap_err();
        assert!(err.message().contains("assign ids"));
    }

    #[test]
    fn test_prediction_outside_brew_is_an_error() {
        let options = RenderOptions::default();
        let leaf = with_id(TreeNode::leaf(5, 0.0), 0);
        assert!(NodeLabelFormatter::new(&options, &BREW).format(&leaf).is_err());
    }
}
