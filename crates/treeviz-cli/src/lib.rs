//! treeviz command-line interface.
//!
pub mod options;
pub mod output;

use std::io::Read;
use std::time::Instant;

use tracing::info;
use treeviz_core::{JsonFile, JsonText, TreeSource};
use treeviz_dot::{
    GraphvizCommand, ImageFormat, RenderOptions, export_graphviz, render_image, tree_json,
};
use treeviz_error::{Error, Result};

pub use options::{NamingConfig, OutputFormat, StyleOptions};
pub use output::{Rendered, write_output};

/// Options for running treeviz.
pub struct TreevizOptions {
    /// Tree JSON path; `None` or `-` reads stdin.
    pub input: Option<String>,
    pub render: RenderOptions,
    pub format: OutputFormat,
    pub with_node_ids: bool,
    pub dot_bin: String,
}

/// Open the tree source named on the command line.
pub fn open_source(input: Option<&str>) -> Result<Box<dyn TreeSource>> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| Error::from(err).with_operation("cli::open_source"))?;
            Ok(Box::new(JsonText::new(text)))
        }
        Some(path) => Ok(Box::new(JsonFile::new(path))),
    }
}

/// Main entry point
pub fn run_main(opts: &TreevizOptions) -> Result<Rendered> {
    let source = open_source(opts.input.as_deref())?;
    run_with_source(source.as_ref(), opts)
}

pub fn run_with_source(source: &dyn TreeSource, opts: &TreevizOptions) -> Result<Rendered> {
    let start = Instant::now();
    let rendered = match opts.format {
        OutputFormat::Dot => Rendered::Text(export_graphviz(source, &opts.render)?),
        OutputFormat::Json => Rendered::Text(tree_json(source, opts.with_node_ids)?),
        OutputFormat::Png => Rendered::Binary(render_image(
            source,
            &opts.render,
            &GraphvizCommand::new(&opts.dot_bin),
            ImageFormat::Png,
        )?),
        OutputFormat::Svg => Rendered::Binary(render_image(
            source,
            &opts.render,
            &GraphvizCommand::new(&opts.dot_bin),
            ImageFormat::Svg,
        )?),
    };
    info!(
        "Rendering ({:?}): {:.3}s",
        opts.format,
        start.elapsed().as_secs_f64()
    );
    Ok(rendered)
}
