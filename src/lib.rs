//! # FillPDF
//!
//! Fill interactive PDF form fields from Rust by shelling out to the
//! `pdftk` command-line tool.
//!
//! ## How it works
//!
//! A [`Form`] (a flat field-name → value map) is encoded into FDF (Forms
//! Data Format, the companion text format PDF tooling understands), staged
//! in a uniquely named temporary directory, and merged into the template
//! PDF by invoking `pdftk <template> fill_form <fdf> output -`. The filled
//! PDF comes back as bytes on stdout. The temporary directory is removed
//! after every call, success or failure.
//!
//! The template can be given as a filesystem path ([`fill`]) or as any
//! readable stream ([`fill_from_reader`]), in which case the template bytes
//! are piped to the tool's stdin.
//!
//! ## Requirements
//!
//! The `pdftk` executable must be resolvable on the system PATH (or be
//! pointed at explicitly via [`FillOptions::with_executable`]). All PDF
//! structural manipulation happens inside that tool; this crate only
//! encodes the field data and orchestrates the process.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fillpdf::Form;
//!
//! # fn main() -> fillpdf::Result<()> {
//! let form = Form::new()
//!     .with("Name", "Alice")
//!     .with("Subscribed", true)
//!     .with("Age", 30.0);
//!
//! let filled = fillpdf::fill(&form, "application.pdf")?;
//! std::fs::write("application_filled.pdf", filled)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitations
//!
//! - Field names and values are written into the FDF literal strings
//!   verbatim; parentheses and backslashes are not escaped (see [`fdf`]).
//! - The external invocation is unbounded by default; set
//!   [`FillOptions::with_timeout`] for bounded latency.
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Form data model
pub mod form;

// FDF encoding
pub mod fdf;

// Fill backends
pub mod backend;
pub mod pdftk;

// Orchestration
pub mod filler;

// Re-exports
pub use backend::{FillBackend, Template};
pub use error::{Error, Result};
pub use filler::{fill, fill_from_reader, FillOptions, FormFiller};
pub use form::{FieldValue, Form};
pub use pdftk::PdftkCommand;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "fillpdf");
    }
}
