//! Rendering options.

use std::collections::HashMap;

/// Naming inputs and style flags for [`export_graphviz`](crate::export_graphviz).
///
/// Every naming input is optional; a missing name falls back to
/// `Feature #i` / `Class #i` / the raw category index.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Feature names indexed by feature index.
    pub feature_names: Option<Vec<String>>,
    /// Category labels keyed by feature name (or by decimal feature index
    /// when `feature_names` is absent), indexed by category index.
    pub category_names: Option<HashMap<String, Vec<String>>>,
    /// Class names indexed by class index.
    pub class_names: Option<Vec<String>>,
    /// Fill nodes with a color whose hue is the predicted class and whose
    /// saturation is the node purity.
    pub filled: bool,
    /// Round box corners.
    pub rounded_corners: bool,
    /// Draw leaves as ellipses instead of boxes.
    pub round_leaves: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            feature_names: None,
            category_names: None,
            class_names: None,
            filled: true,
            rounded_corners: true,
            round_leaves: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_class_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Add category labels for one feature.
    pub fn with_category_names<I, S>(mut self, feature: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_names
            .get_or_insert_with(HashMap::new)
            .insert(feature.into(), labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn with_rounded_corners(mut self, rounded_corners: bool) -> Self {
        self.rounded_corners = rounded_corners;
        self
    }

    pub fn with_round_leaves(mut self, round_leaves: bool) -> Self {
        self.round_leaves = round_leaves;
        self
    }

    /// Value of the default node `style` attribute, `None` when empty.
    pub fn node_style(&self) -> Option<String> {
        let mut flags = Vec::new();
        if self.filled {
            flags.push("filled");
        }
        if self.rounded_corners {
            flags.push("rounded");
        }
        (!flags.is_empty()).then(|| flags.join(","))
    }
}
