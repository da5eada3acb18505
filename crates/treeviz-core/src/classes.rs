use std::collections::BTreeSet;

use tracing::debug;

use crate::node::TreeNode;

/// Every class index predicted anywhere in the tree, internal nodes included.
pub fn distinct_classes(root: &TreeNode) -> BTreeSet<usize> {
    root.iter().map(TreeNode::prediction).collect()
}

/// Number of classes, taken as the largest predicted index plus one.
///
/// Indices are assumed dense and 0-based: a tree predicting only `{0, 2}`
/// reports 3 classes.
pub fn count_classes(root: &TreeNode) -> usize {
    let classes = distinct_classes(root);
    let count = classes.last().map_or(0, |max| max + 1);
    if classes.len() != count {
        debug!(
            seen = classes.len(),
            count, "class indices are not dense; unseen classes still get a color"
        );
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{InternalNode, Split};

    #[test]
    fn test_sparse_classes_count_up_to_max() {
        let tree: TreeNode = InternalNode::new(
            0,
            Split::continuous(0.5),
            TreeNode::leaf(0, 0.0),
            TreeNode::leaf(2, 0.0),
        )
        .into();

        assert_eq!(count_classes(&tree), 3);
        assert_eq!(distinct_classes(&tree), BTreeSet::from([0, 2]));
    }

    #[test]
    fn test_internal_prediction_is_counted() {
        let tree: TreeNode = InternalNode::new(
            0,
            Split::continuous(0.5),
            TreeNode::leaf(0, 0.0),
            TreeNode::leaf(1, 0.0),
        )
        .with_prediction(4)
        .into();

        assert_eq!(count_classes(&tree), 5);
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(count_classes(&TreeNode::leaf(0, 0.0)), 1);
    }
}
