//! Rasterizing DOT text through an external layout engine.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing::{debug, info};
use treeviz_core::TreeSource;
use treeviz_error::{Error, Result};

use crate::export::export_graphviz;
use crate::options::RenderOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Turns DOT text into image bytes.
pub trait Rasterizer {
    fn rasterize(&self, dot: &str, format: ImageFormat) -> Result<Vec<u8>>;
}

/// Graphviz `dot` executable, fed through stdin.
#[derive(Debug, Clone)]
pub struct GraphvizCommand {
    program: PathBuf,
}

impl Default for GraphvizCommand {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl GraphvizCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Rasterizer for GraphvizCommand {
    fn rasterize(&self, dot: &str, format: ImageFormat) -> Result<Vec<u8>> {
        let program = self.program.display().to_string();
        debug!(%program, %format, "spawning layout engine");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{format}"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                let err = if err.kind() == std::io::ErrorKind::NotFound {
                    Error::rasterizer_unavailable(program.clone()).set_source(err)
                } else {
                    Error::from(err).with_context("tool", program.clone())
                };
                err.with_operation("dot::GraphvizCommand::rasterize")
            })?;

        // stdin is closed when dropped at the end of this block
        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                Error::unexpected("layout engine stdin was not captured")
                    .with_operation("dot::GraphvizCommand::rasterize")
            })?;
            // an engine that exits early is reported through its exit status below
            match stdin.write_all(dot.as_bytes()) {
                Err(err) if err.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(
                        Error::from(err).with_operation("dot::GraphvizCommand::rasterize")
                    );
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|err| Error::from(err).with_operation("dot::GraphvizCommand::rasterize"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::rasterize_failed(stderr)
                .with_operation("dot::GraphvizCommand::rasterize")
                .with_context("tool", program)
                .with_context("status", output.status.to_string()));
        }

        if output.stdout.is_empty() {
            return Err(Error::invalid_format("layout engine produced no output")
                .with_operation("dot::GraphvizCommand::rasterize")
                .with_context("tool", program)
                .with_context("format", format.as_str()));
        }

        info!(bytes = output.stdout.len(), %format, "image rendered");
        Ok(output.stdout)
    }
}

/// Export the tree and rasterize it with the given engine.
pub fn render_image<S, R>(
    source: &S,
    options: &RenderOptions,
    rasterizer: &R,
    format: ImageFormat,
) -> Result<Vec<u8>>
where
    S: TreeSource + ?Sized,
    R: Rasterizer + ?Sized,
{
    let dot = export_graphviz(source, options)?;
    rasterizer.rasterize(&dot, format)
}

/// PNG through the `dot` executable on `PATH`.
pub fn plot_tree<S: TreeSource + ?Sized>(source: &S, options: &RenderOptions) -> Result<Vec<u8>> {
    render_image(source, options, &GraphvizCommand::default(), ImageFormat::Png)
}
