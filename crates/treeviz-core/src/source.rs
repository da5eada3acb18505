//! Where the exported tree structure comes from.
//!
//! Model frameworks export a fitted tree as JSON text; a [`TreeSource`] is any
//! adapter able to hand that text over. The rendering pipeline only ever sees
//! the decoded [`TreeNode`].

use std::path::{Path, PathBuf};

use tracing::debug;
use treeviz_error::{Error, Result};

use crate::json::decode_tree;
use crate::node::TreeNode;

pub trait TreeSource {
    /// Fetch the JSON text describing the tree.
    fn fetch_structure(&self) -> Result<String>;
}

impl<T: TreeSource + ?Sized> TreeSource for &T {
    fn fetch_structure(&self) -> Result<String> {
        (**self).fetch_structure()
    }
}

/// JSON already held in memory.
#[derive(Debug, Clone)]
pub struct JsonText(String);

impl JsonText {
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }
}

impl TreeSource for JsonText {
    fn fetch_structure(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// JSON file written by a model export.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TreeSource for JsonFile {
    fn fetch_structure(&self) -> Result<String> {
        let display = self.path.display().to_string();
        std::fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(display)
                    .with_operation("core::JsonFile::fetch_structure")
                    .set_source(err)
            } else {
                Error::from(err)
                    .with_operation("core::JsonFile::fetch_structure")
                    .with_context("path", display)
            }
        })
    }
}

/// Fetch and decode a tree. Ids are left as the source wrote them.
pub fn load_tree<S: TreeSource + ?Sized>(source: &S) -> Result<TreeNode> {
    let json = source.fetch_structure()?;
    debug!(bytes = json.len(), "fetched tree structure");
    decode_tree(&json).map_err(|err| err.with_operation("core::load_tree"))
}
