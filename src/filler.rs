//! Form filling orchestration.
//!
//! [`FormFiller`] validates inputs, encodes the [`Form`] to FDF and hands
//! the merge to a [`FillBackend`]. Each call is a strictly linear pipeline:
//! validate, stage transient resources, spawn, capture, clean up, return.
//! No retries, no shared state between calls; concurrent fills are safe
//! because every invocation stages its FDF in a uniquely named temp area.

use crate::backend::{FillBackend, Template};
use crate::error::{Error, Result};
use crate::fdf;
use crate::form::Form;
use crate::pdftk::PdftkCommand;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for fill operations.
///
/// # Example
///
/// ```
/// use fillpdf::FillOptions;
/// use std::time::Duration;
///
/// let options = FillOptions::new()
///     .with_executable("/opt/pdftk/bin/pdftk")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct FillOptions {
    /// Name (resolved on PATH) or path of the external fill executable.
    pub executable: String,

    /// Kill the external tool if it runs longer than this. `None` leaves
    /// the invocation unbounded.
    pub timeout: Option<Duration>,

    /// Parent directory for transient working areas. `None` uses the
    /// system temp directory.
    pub work_dir: Option<PathBuf>,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FillOptions {
    /// Create options with defaults: `pdftk` on PATH, no timeout, system
    /// temp directory.
    pub fn new() -> Self {
        Self {
            executable: "pdftk".to_string(),
            timeout: None,
            work_dir: None,
        }
    }

    /// Use a different executable name or path.
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Impose a timeout on the external tool.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Stage transient files under the given directory.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }
}

/// Fills PDF forms through a configurable backend.
///
/// # Example
///
/// ```ignore
/// use fillpdf::{Form, FormFiller};
///
/// let form = Form::new()
///     .with("Name", "Alice")
///     .with("Subscribed", true);
/// let filled = FormFiller::new().fill(&form, "template.pdf")?;
/// std::fs::write("filled.pdf", filled)?;
/// ```
pub struct FormFiller {
    backend: Box<dyn FillBackend>,
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new()
    }
}

impl FormFiller {
    /// Create a filler using `pdftk` with default options.
    pub fn new() -> Self {
        Self::with_options(FillOptions::default())
    }

    /// Create a filler using `pdftk` with the given options.
    pub fn with_options(options: FillOptions) -> Self {
        Self {
            backend: Box::new(PdftkCommand::new(options)),
        }
    }

    /// Create a filler over a custom backend.
    pub fn with_backend(backend: Box<dyn FillBackend>) -> Self {
        Self { backend }
    }

    /// Fill the template PDF at `template` with `form` and return the
    /// filled PDF bytes.
    ///
    /// Validation order: the path is made absolute, checked for existence,
    /// then the backend is probed, all before any transient resource is
    /// created. A nonexistent template therefore never touches the
    /// filesystem, and a missing tool never leaves a temp directory behind.
    pub fn fill(&self, form: &Form, template: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = absolutize(template.as_ref())?;
        match path.try_exists() {
            Ok(true) => {},
            Ok(false) => return Err(Error::TemplateNotFound(path)),
            Err(e) => return Err(Error::TemplateAccess { path, source: e }),
        }
        self.backend.check_available()?;

        let payload = fdf::encode(form)?;
        self.backend.fill(Template::Path(&path), &payload)
    }

    /// Fill a template PDF supplied as a readable stream.
    ///
    /// The template bytes are piped to the external tool's stdin; no
    /// filesystem path is required for the template.
    pub fn fill_from_reader(&self, form: &Form, mut template: impl Read + Send) -> Result<Vec<u8>> {
        self.backend.check_available()?;

        let payload = fdf::encode(form)?;
        self.backend.fill(Template::Reader(&mut template), &payload)
    }
}

/// Fill `template` with `form` using `pdftk` with default options.
///
/// Convenience wrapper around [`FormFiller::fill`].
pub fn fill(form: &Form, template: impl AsRef<Path>) -> Result<Vec<u8>> {
    FormFiller::new().fill(form, template)
}

/// Fill a template supplied as a readable stream, using `pdftk` with
/// default options.
///
/// Convenience wrapper around [`FormFiller::fill_from_reader`].
pub fn fill_from_reader(form: &Form, template: impl Read + Send) -> Result<Vec<u8>> {
    FormFiller::new().fill_from_reader(form, template)
}

/// Make `path` absolute against the current working directory, without
/// touching the filesystem entry itself.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| Error::PathResolution {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize_keeps_absolute_paths() {
        let path = Path::new("/tmp/form.pdf");
        assert_eq!(absolutize(path).unwrap(), PathBuf::from("/tmp/form.pdf"));
    }

    #[test]
    fn test_absolutize_joins_cwd() {
        let resolved = absolutize(Path::new("form.pdf")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("form.pdf"));
    }

    #[test]
    fn test_fill_nonexistent_template() {
        let form = Form::new().with("a", "b");
        match fill(&form, "/definitely/not/here/form.pdf") {
            Err(Error::TemplateNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/form.pdf"));
            },
            other => panic!("expected TemplateNotFound, got {:?}", other.map(|_| "bytes")),
        }
    }
}
