//! Lexical JSON pretty-printer.
//!
//! `jsonpad` reindents raw JSON-like byte streams in a single pass over the
//! input, without parsing: it only understands the structural characters
//! `{` `}` `[` `]` `,`, the quote toggles `'` and `"`, and unquoted
//! whitespace. Malformed input is reformatted best-effort instead of being
//! rejected.
//!
//! # Examples
//! ```
//! let pretty = jsonpad::format(r#"{"a":1}"#);
//! assert_eq!(pretty, "{\n    \"a\": 1\n}");
//! ```

pub mod constants;
pub mod error;
pub mod options;
pub mod scan;

use std::io::{Read, Write};

pub use crate::error::{Error, Result};
pub use crate::options::FormatOptions;

/// Format a string with default options (4-space indent).
pub fn format(input: &str) -> String {
    format_with_options(input, &FormatOptions::default())
}

pub fn format_with_options(input: &str, options: &FormatOptions) -> String {
    let bytes = scan::format(input.as_bytes(), options);
    // The scanner only inserts and drops ASCII and copies everything else
    // verbatim, so valid UTF-8 in means valid UTF-8 out.
    String::from_utf8(bytes).expect("formatted output must be valid UTF-8")
}

/// Format an arbitrary byte sequence with default options.
///
/// Unlike [`format`], this makes no assumption about the input encoding;
/// bytes outside the structural set pass through untouched.
pub fn format_bytes(input: &[u8]) -> Vec<u8> {
    format_bytes_with_options(input, &FormatOptions::default())
}

pub fn format_bytes_with_options(input: &[u8], options: &FormatOptions) -> Vec<u8> {
    scan::format(input, options)
}

/// Read a whole byte stream, then format it with default options.
pub fn format_reader<R: Read>(reader: R) -> Result<Vec<u8>> {
    format_reader_with_options(reader, &FormatOptions::default())
}

pub fn format_reader_with_options<R: Read>(
    mut reader: R,
    options: &FormatOptions,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(Error::Read)?;
    Ok(scan::format(&buf, options))
}

/// Format a byte sequence and write the result with default options.
pub fn format_to_writer<W: Write>(writer: W, input: &[u8]) -> Result<()> {
    format_to_writer_with_options(writer, input, &FormatOptions::default())
}

pub fn format_to_writer_with_options<W: Write>(
    mut writer: W,
    input: &[u8],
    options: &FormatOptions,
) -> Result<()> {
    writer
        .write_all(&scan::format(input, options))
        .map_err(Error::Write)
}
