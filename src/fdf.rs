//! FDF (Forms Data Format) encoder.
//!
//! Produces the field-data payload handed to the external fill tool: the
//! FDF 1.2 header, one `<< /T (name) /V (value)>>` entry per form field,
//! and a minimal trailer referencing object 1 as `/Root`.
//!
//! # Known limitation
//!
//! Field names and values are written into the `(...)` literal strings
//! verbatim. Parentheses and backslashes are **not** escaped, so a name or
//! value containing `(`, `)` or `\` produces malformed FDF. This matches
//! the byte layout long-standing consumers expect; do not "fix" it here.

use crate::error::Result;
use crate::form::Form;
use std::io::Write;

/// Binary comment marker conventionally placed after the version line so
/// transfer tools treat the file as binary.
const BINARY_MARKER: [u8; 4] = [0xe2, 0xe3, 0xcf, 0xd3];

/// Encode a [`Form`] into FDF bytes.
///
/// Fields are emitted in sorted name order, so encoding the same form twice
/// yields byte-identical output.
///
/// # Example
///
/// ```
/// use fillpdf::{fdf, Form};
///
/// let form = Form::new().with("Name", "Alice");
/// let bytes = fdf::encode(&form).unwrap();
/// let text = String::from_utf8_lossy(&bytes);
/// assert!(text.contains("<< /T (Name) /V (Alice)>>"));
/// ```
pub fn encode(form: &Form) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    // FDF header
    writeln!(output, "%FDF-1.2")?;
    output.write_all(b"%")?;
    output.write_all(&BINARY_MARKER)?;
    writeln!(output)?;

    // FDF catalog object, opening the fields array
    writeln!(output, "1 0 obj")?;
    writeln!(output, "<<")?;
    writeln!(output, "/FDF << /Fields [")?;

    // One entry per field, unescaped (see module docs)
    for (name, value) in form.iter() {
        writeln!(output, "<< /T ({}) /V ({})>>", name, value.render())?;
    }

    // Close the array, the dictionaries and the object
    writeln!(output, "]")?;
    writeln!(output, ">>")?;
    writeln!(output, ">>")?;
    writeln!(output, "endobj")?;

    // Trailer
    writeln!(output, "trailer")?;
    writeln!(output, "<<")?;
    writeln!(output, "/Root 1 0 R")?;
    writeln!(output, ">>")?;
    writeln!(output, "%%EOF")?;

    Ok(output)
}
