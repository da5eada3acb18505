//! # treeviz-error
//!
//! Unified error handling for treeviz.
//!
//! - **ErrorKind**: what went wrong (e.g. DeserializationFailed, RasterizerUnavailable)
//! - **ErrorStatus**: whether retrying can help (Permanent, Temporary, Persistent)
//! - **Context**: operation name plus key/value pairs for locating the cause
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use treeviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DeserializationFailed, "missing field `prediction`")
//!         .with_operation("core::load_tree")
//!         .with_context("path", "tree.json"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, treeviz_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is created once; callers further up only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using treeviz Error
pub type Result<T> = std::result::Result<T, Error>;
