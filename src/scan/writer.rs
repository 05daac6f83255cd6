use crate::constants::OUTPUT_HEADROOM;
use crate::options::FormatOptions;

pub(crate) struct Writer {
    buffer: Vec<u8>,
    indent_unit: String,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn new(input_len: usize, options: &FormatOptions) -> Self {
        Self {
            buffer: Vec::with_capacity(input_len + OUTPUT_HEADROOM),
            indent_unit: options.unit.repeat(options.width),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn write_newline(&mut self) {
        self.buffer.push(b'\n');
    }

    /// Write the indentation for `depth` nesting levels. Depths below zero
    /// (unbalanced input) emit nothing.
    pub fn write_indent(&mut self, depth: isize) {
        let Ok(depth) = usize::try_from(depth) else {
            return;
        };
        if depth == 0 || self.indent_unit.is_empty() {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer
            .extend_from_slice(self.indent_cache[depth].as_bytes());
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = match self.indent_cache.last() {
                Some(prev) => {
                    let mut s = String::with_capacity(prev.len() + self.indent_unit.len());
                    s.push_str(prev);
                    s.push_str(&self.indent_unit);
                    s
                }
                None => String::new(),
            };
            self.indent_cache.push(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_writer(width: usize, unit: &str) -> Writer {
        let options = FormatOptions::new().with_width(width).with_unit(unit);
        Writer::new(0, &options)
    }

    #[rstest::rstest]
    fn test_write_indent() {
        let mut writer = make_writer(2, " ");

        writer.write_indent(0);
        writer.write_byte(b'a');
        writer.write_newline();

        writer.write_indent(1);
        writer.write_byte(b'b');
        writer.write_newline();

        writer.write_indent(2);
        writer.write_byte(b'c');

        assert_eq!(writer.finish(), b"a\n  b\n    c");
    }

    #[rstest::rstest]
    fn test_negative_depth_emits_nothing() {
        let mut writer = make_writer(4, " ");

        writer.write_indent(-1);
        writer.write_byte(b'}');

        assert_eq!(writer.finish(), b"}");
    }

    #[rstest::rstest]
    fn test_zero_width_emits_nothing() {
        let mut writer = make_writer(0, " ");

        writer.write_indent(3);
        writer.write_byte(b'x');

        assert_eq!(writer.finish(), b"x");
    }

    #[rstest::rstest]
    fn test_multi_char_unit() {
        let mut writer = make_writer(2, "ab");

        writer.write_indent(2);

        assert_eq!(writer.finish(), b"abababab");
    }

    #[rstest::rstest]
    fn test_indent_cache_grows_on_demand() {
        let mut writer = make_writer(1, "\t");

        writer.write_indent(5);
        writer.write_newline();
        writer.write_indent(1);

        assert_eq!(writer.finish(), b"\t\t\t\t\t\n\t");
    }
}
