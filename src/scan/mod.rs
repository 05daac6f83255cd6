//! The formatting scan: a single stateful pass over the input bytes.

mod writer;

use memchr::memchr2;

use crate::options::FormatOptions;
use writer::Writer;

/// Reformat `input` by inserting newlines and indentation around the
/// structural characters `{` `}` `[` `]` `,` and collapsing unquoted
/// whitespace.
///
/// This is a total function: it never fails, and unbalanced or otherwise
/// malformed input produces best-effort output rather than an error.
pub fn format(input: &[u8], options: &FormatOptions) -> Vec<u8> {
    Scanner::new(input, options).run()
}

struct Scanner<'a> {
    input: &'a [u8],
    writer: Writer,
    depth: isize,
    single_quoted: bool,
    double_quoted: bool,
    fresh_line: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8], options: &FormatOptions) -> Self {
        Self {
            input,
            writer: Writer::new(input.len(), options),
            depth: 0,
            single_quoted: false,
            double_quoted: false,
            fresh_line: true,
        }
    }

    fn run(mut self) -> Vec<u8> {
        let mut pos = 0;
        while pos < self.input.len() {
            let byte = self.input[pos];
            // Quote toggles are applied unconditionally, even while the
            // other quote flag is set. A stray quote of one kind inside a
            // region delimited by the other kind desynchronizes the scan.
            match byte {
                b'\'' => self.single_quoted = !self.single_quoted,
                b'"' => self.double_quoted = !self.double_quoted,
                _ => {}
            }
            if self.single_quoted || self.double_quoted {
                pos = self.copy_quoted_run(pos);
            } else {
                self.scan_unquoted(byte);
                pos += 1;
            }
        }
        self.writer.finish()
    }

    /// Copy bytes verbatim from `pos` up to (but not including) the next
    /// quote character, returning the position to resume scanning at. The
    /// byte at `pos` itself is part of the run; only `'` and `"` can change
    /// scan state inside a quoted region.
    fn copy_quoted_run(&mut self, pos: usize) -> usize {
        let end = match memchr2(b'\'', b'"', &self.input[pos + 1..]) {
            Some(offset) => pos + 1 + offset,
            None => self.input.len(),
        };
        self.writer.write_bytes(&self.input[pos..end]);
        self.fresh_line = false;
        end
    }

    fn scan_unquoted(&mut self, byte: u8) {
        match byte {
            b'{' => {
                if !self.fresh_line {
                    self.writer.write_newline();
                    self.writer.write_indent(self.depth);
                }
                self.writer.write_byte(b'{');
                self.writer.write_newline();
                self.fresh_line = true;
                self.depth += 1;
                self.writer.write_indent(self.depth);
            }
            b'}' => {
                self.depth -= 1;
                self.writer.write_newline();
                self.fresh_line = true;
                self.writer.write_indent(self.depth);
                self.writer.write_byte(b'}');
            }
            b'[' => {
                self.writer.write_byte(b'[');
                self.writer.write_newline();
                self.fresh_line = true;
                self.depth += 1;
                self.writer.write_indent(self.depth);
            }
            b']' => {
                self.depth -= 1;
                self.writer.write_newline();
                self.fresh_line = true;
                self.writer.write_indent(self.depth);
                self.writer.write_byte(b']');
            }
            b',' => {
                self.writer.write_byte(b',');
                self.writer.write_newline();
                self.fresh_line = true;
                self.writer.write_indent(self.depth);
            }
            b'\n' | b'\t' | b'\r' | b' ' => {}
            b':' => {
                self.writer.write_byte(b':');
                self.writer.write_byte(b' ');
                self.fresh_line = false;
            }
            _ => {
                self.writer.write_byte(byte);
                self.fresh_line = false;
            }
        }
    }
}
