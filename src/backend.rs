//! Abstract form-filling backend.
//!
//! The library delegates all actual PDF manipulation to a backend with a
//! single operation: merge an FDF payload into a template and return the
//! filled bytes. The default backend shells out to `pdftk`
//! (see [`crate::pdftk`]); swapping in a different external tool or an
//! in-process implementation does not touch the encoder or the
//! [`FormFiller`](crate::FormFiller) surface.

use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// Source of the template PDF for one fill operation.
pub enum Template<'a> {
    /// Template on the filesystem. The path has already been resolved and
    /// checked for existence by the caller.
    Path(&'a Path),
    /// Template bytes supplied as a readable stream.
    Reader(&'a mut (dyn Read + Send)),
}

impl std::fmt::Debug for Template<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Template::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

/// A form-filling capability: merges FDF field data into a template PDF.
pub trait FillBackend {
    /// Verify the backend is usable before any transient resources are
    /// created (for a subprocess backend: the executable resolves on PATH).
    fn check_available(&self) -> Result<()>;

    /// Merge `fdf` into `template` and return the filled PDF bytes.
    fn fill(&self, template: Template<'_>, fdf: &[u8]) -> Result<Vec<u8>>;
}
