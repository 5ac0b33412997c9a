//! Error types for the form-filling library.
//!
//! Every failure mode of a fill operation maps to its own variant so callers
//! can match on the exact stage that failed.

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for fill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while encoding FDF data or running the
/// external fill tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template path could not be made absolute.
    #[error("failed to resolve template path '{path}': {source}")]
    PathResolution {
        /// Path as supplied by the caller
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// The resolved template path does not exist on disk.
    #[error("template PDF does not exist: '{0}'")]
    TemplateNotFound(PathBuf),

    /// The existence check itself failed (e.g. permission denied on a
    /// parent directory). Distinct from the template simply being absent.
    #[error("failed to check template PDF '{path}': {source}")]
    TemplateAccess {
        /// Resolved template path
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// The external fill executable was not found on the search path.
    #[error("'{0}' executable not found on PATH")]
    ToolMissing(String),

    /// The transient working directory or file could not be created.
    #[error("failed to create temporary working area: {0}")]
    TempResource(#[source] std::io::Error),

    /// The encoded FDF payload could not be written to its staging file.
    #[error("failed to write FDF data file: {0}")]
    FdfWrite(#[source] std::io::Error),

    /// The external tool could not be spawned or exited with a non-zero
    /// status. Carries the tool's captured diagnostic output.
    #[error("{tool} execution failed: {diagnostic}")]
    ToolExecution {
        /// Executable that was invoked
        tool: String,
        /// Exit code, if the process ran to completion
        status: Option<i32>,
        /// Captured stderr (or spawn error text)
        diagnostic: String,
    },

    /// The external tool did not finish within the configured timeout and
    /// was killed.
    #[error("{tool} did not finish within {timeout:?} and was killed")]
    ToolTimeout {
        /// Executable that was invoked
        tool: String,
        /// Configured deadline
        timeout: Duration,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_error() {
        let err = Error::TemplateNotFound(PathBuf::from("/tmp/missing.pdf"));
        let msg = format!("{}", err);
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("/tmp/missing.pdf"));
    }

    #[test]
    fn test_tool_missing_error() {
        let err = Error::ToolMissing("pdftk".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("pdftk"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_tool_execution_error() {
        let err = Error::ToolExecution {
            tool: "pdftk".to_string(),
            status: Some(1),
            diagnostic: "Error: Unable to find file".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("pdftk"));
        assert!(msg.contains("Unable to find file"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
