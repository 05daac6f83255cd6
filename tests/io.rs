use std::io::{self, Cursor, Read, Write};

use jsonpad::{
    format_reader, format_reader_with_options, format_to_writer, format_to_writer_with_options,
    Error, FormatOptions,
};
use rstest::rstest;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "boom"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn format_reader_buffers_and_formats() {
    let out = format_reader(Cursor::new(r#"{"a":1}"#)).expect("format reader");
    assert_eq!(out, b"{\n    \"a\": 1\n}");
}

#[rstest]
fn format_reader_honors_options() {
    let options = FormatOptions::new().with_width(1).with_unit("\t");
    let out = format_reader_with_options(Cursor::new("[1]"), &options).expect("format reader");
    assert_eq!(out, b"[\n\t1\n]");
}

#[rstest]
fn format_to_writer_writes_formatted_bytes() {
    let mut out = Vec::new();
    format_to_writer(&mut out, br#"{"a":1}"#).expect("format to writer");
    assert_eq!(out, b"{\n    \"a\": 1\n}");
}

#[rstest]
fn format_to_writer_honors_options() {
    let options = FormatOptions::new().with_width(2);
    let mut out = Vec::new();
    format_to_writer_with_options(&mut out, b"[1]", &options).expect("format to writer");
    assert_eq!(out, b"[\n  1\n]");
}

#[rstest]
fn read_failures_surface_as_read_errors() {
    let err = format_reader(FailingReader).unwrap_err();
    assert!(matches!(err, Error::Read(_)));
    assert!(err.to_string().contains("failed to read input"));
}

#[rstest]
fn write_failures_surface_as_write_errors() {
    let err = format_to_writer(FailingWriter, b"[1]").unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    assert!(err.to_string().contains("failed to write formatted output"));
}
