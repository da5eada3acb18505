//! Command-line and naming-file options.

use std::collections::HashMap;
use std::path::Path;

use clap::{Args, ValueEnum};
use serde::Deserialize;
use treeviz_dot::RenderOptions;
use treeviz_error::{Error, Result};

/// What the tool writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT text
    #[default]
    Dot,
    /// PNG image rendered by Graphviz
    Png,
    /// SVG image rendered by Graphviz
    Svg,
    /// The tree itself as JSON
    Json,
}

/// Node styling flags.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleOptions {
    /// Do not fill nodes with class colors.
    #[arg(long = "no-filled")]
    pub no_filled: bool,

    /// Use square box corners.
    #[arg(long = "no-rounded-corners")]
    pub no_rounded_corners: bool,

    /// Draw leaves as boxes instead of ellipses.
    #[arg(long = "no-round-leaves")]
    pub no_round_leaves: bool,
}

impl StyleOptions {
    pub fn apply(&self, options: RenderOptions) -> RenderOptions {
        options
            .with_filled(!self.no_filled)
            .with_rounded_corners(!self.no_rounded_corners)
            .with_round_leaves(!self.no_round_leaves)
    }
}

/// Display names for features, classes and categories.
///
/// ```toml
/// feature_names = ["sepal_length", "sepal_width", "petal_length", "petal_width"]
/// class_names = ["setosa", "versicolor", "virginica"]
///
/// [category_names]
/// soil = ["clay", "loam", "sand"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub feature_names: Option<Vec<String>>,
    pub class_names: Option<Vec<String>>,
    pub category_names: Option<HashMap<String, Vec<String>>>,
}

impl NamingConfig {
    /// Read a naming file: TOML for `.toml`, JSON otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("cli::NamingConfig::load")
                .with_context("path", display.clone())
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::from_toml_str(&text)
        } else {
            Self::from_json_str(&text)
        };
        parsed.map_err(|err| err.with_context("path", display))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| {
            Error::config_invalid(err.to_string())
                .with_operation("cli::NamingConfig::from_toml_str")
                .set_source(err)
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            Error::config_invalid(err.to_string())
                .with_operation("cli::NamingConfig::from_json_str")
                .set_source(err)
        })
    }

    /// Copy every name list that is set onto `options`.
    pub fn apply(self, mut options: RenderOptions) -> RenderOptions {
        if self.feature_names.is_some() {
            options.feature_names = self.feature_names;
        }
        if self.class_names.is_some() {
            options.class_names = self.class_names;
        }
        if self.category_names.is_some() {
            options.category_names = self.category_names;
        }
        options
    }
}
