//! Output writing.

use std::borrow::Cow;
use std::io::Write;

use tracing::info;
use treeviz_error::{Error, Result};

/// Result of one run: text (DOT, JSON) or image bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    Binary(Vec<u8>),
}

impl Rendered {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Text(text) => text.as_bytes(),
            Rendered::Binary(bytes) => bytes.as_slice(),
        }
    }
}

/// Write to `path`, or to stdout when no path is given. Text always ends with a newline.
pub fn write_output(rendered: &Rendered, path: Option<&str>) -> Result<()> {
    let bytes: Cow<'_, [u8]> = match rendered {
        Rendered::Text(text) if !text.ends_with('\n') => {
            Cow::Owned(format!("{text}\n").into_bytes())
        }
        _ => Cow::Borrowed(rendered.as_bytes()),
    };

    match path {
        Some(path) => {
            std::fs::write(path, &bytes).map_err(|err| {
                Error::from(err)
                    .with_operation("cli::write_output")
                    .with_context("path", path)
            })?;
            info!(path, bytes = bytes.len(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .map_err(|err| Error::from(err).with_operation("cli::write_output"))?;
        }
    }
    Ok(())
}
