//! Subprocess backend driving the `pdftk` command-line tool.
//!
//! Invocation contract: `pdftk <template> fill_form <fdf> output -`, where
//! `<template>` is either the resolved template path or `-` (template bytes
//! on stdin), and the filled PDF arrives on stdout. The FDF payload is
//! staged in a uniquely named temporary directory that also serves as the
//! child's working directory, and is removed after every call; removal
//! failures are logged, never surfaced.

use crate::backend::{FillBackend, Template};
use crate::error::{Error, Result};
use crate::filler::FillOptions;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Instant;

/// Name of the staged FDF file inside the working directory.
const FDF_FILE_NAME: &str = "data.fdf";

/// Prefix for the per-call working directory.
const TEMP_PREFIX: &str = "fillpdf-";

/// pdftk's placeholder token for stdin/stdout.
const STDIO_TOKEN: &str = "-";

/// How often to poll the child when a timeout is configured.
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(25);

/// [`FillBackend`] implementation that shells out to `pdftk`.
///
/// Construct via [`FillOptions`] to change the executable name, impose a
/// timeout, or redirect the transient working area.
#[derive(Debug)]
pub struct PdftkCommand {
    options: FillOptions,
}

impl Default for PdftkCommand {
    fn default() -> Self {
        Self::new(FillOptions::default())
    }
}

impl PdftkCommand {
    /// Create a backend with the given options.
    pub fn new(options: FillOptions) -> Self {
        Self { options }
    }

    fn tool(&self) -> &str {
        &self.options.executable
    }

    /// Create the per-call working directory, uniquely named so concurrent
    /// fill operations never collide.
    fn create_work_dir(&self) -> Result<WorkDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        let dir = match &self.options.work_dir {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(Error::TempResource)?;
        Ok(WorkDir::new(dir))
    }

    /// Spawn the child, pump its pipes, and collect the outcome.
    ///
    /// Each pipe gets its own scoped thread; draining stdout and stderr
    /// while feeding stdin avoids deadlocking on full OS pipe buffers.
    fn run(&self, mut cmd: Command, stdin_src: Option<&mut (dyn Read + Send)>) -> Result<Vec<u8>> {
        let mut child = cmd.spawn().map_err(|e| Error::ToolExecution {
            tool: self.tool().to_string(),
            status: None,
            diagnostic: e.to_string(),
        })?;

        let mut stdin_pipe = child.stdin.take();
        let mut stdout_pipe = child.stdout.take();
        let mut stderr_pipe = child.stderr.take();

        let (status, stdout, stderr) = std::thread::scope(
            |scope| -> Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
                if let (Some(mut pipe), Some(reader)) = (stdin_pipe.take(), stdin_src) {
                    scope.spawn(move || {
                        // A broken pipe here means the child exited early;
                        // its exit status carries the real diagnosis.
                        if let Err(e) = io::copy(reader, &mut pipe) {
                            log::debug!("template stdin pipe closed early: {}", e);
                        }
                    });
                }
                let stdout_thread = scope.spawn(move || {
                    let mut buf = Vec::new();
                    if let Some(pipe) = stdout_pipe.as_mut() {
                        let _ = pipe.read_to_end(&mut buf);
                    }
                    buf
                });
                let stderr_thread = scope.spawn(move || {
                    let mut buf = Vec::new();
                    if let Some(pipe) = stderr_pipe.as_mut() {
                        let _ = pipe.read_to_end(&mut buf);
                    }
                    buf
                });

                let status = self.wait(&mut child)?;
                let stdout = stdout_thread.join().unwrap_or_default();
                let stderr = stderr_thread.join().unwrap_or_default();
                Ok((status, stdout, stderr))
            },
        )?;

        if !status.success() {
            let diagnostic = if stderr.is_empty() { &stdout } else { &stderr };
            return Err(Error::ToolExecution {
                tool: self.tool().to_string(),
                status: status.code(),
                diagnostic: String::from_utf8_lossy(diagnostic).trim().to_string(),
            });
        }
        Ok(stdout)
    }

    /// Wait for the child, honoring the configured timeout.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let limit = match self.options.timeout {
            None => return child.wait().map_err(Error::Io),
            Some(limit) => limit,
        };
        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                if let Err(e) = child.kill() {
                    log::warn!("failed to kill timed-out {}: {}", self.tool(), e);
                }
                let _ = child.wait();
                return Err(Error::ToolTimeout {
                    tool: self.tool().to_string(),
                    timeout: limit,
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl FillBackend for PdftkCommand {
    fn check_available(&self) -> Result<()> {
        let resolved = which::which(self.tool())
            .map_err(|_| Error::ToolMissing(self.tool().to_string()))?;
        log::debug!("resolved {} to '{}'", self.tool(), resolved.display());
        Ok(())
    }

    fn fill(&self, template: Template<'_>, fdf: &[u8]) -> Result<Vec<u8>> {
        let dir = self.create_work_dir()?;
        let fdf_path = dir.path().join(FDF_FILE_NAME);
        std::fs::write(&fdf_path, fdf).map_err(Error::FdfWrite)?;

        let mut cmd = Command::new(self.tool());
        let stdin_src: Option<&mut (dyn Read + Send)> = match template {
            Template::Path(path) => {
                cmd.arg(path).stdin(Stdio::null());
                None
            },
            Template::Reader(reader) => {
                cmd.arg(STDIO_TOKEN).stdin(Stdio::piped());
                Some(reader)
            },
        };
        cmd.arg("fill_form")
            .arg(&fdf_path)
            .arg("output")
            .arg(STDIO_TOKEN)
            // Working directory pinned to the transient area so the tool
            // never resolves relative paths against the caller's cwd.
            .current_dir(dir.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        log::debug!("invoking {} in '{}'", self.tool(), dir.path().display());
        self.run(cmd, stdin_src)
        // `dir` dropped here: removed on success and on every error path.
    }
}

/// Scoped transient working area.
///
/// Removal is guaranteed on drop; a removal failure is logged and never
/// becomes the operation's result.
struct WorkDir {
    dir: Option<tempfile::TempDir>,
    path: PathBuf,
}

impl WorkDir {
    fn new(dir: tempfile::TempDir) -> Self {
        let path = dir.path().to_path_buf();
        Self { dir: Some(dir), path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            if let Err(e) = dir.close() {
                log::warn!(
                    "failed to remove temporary directory '{}': {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}
