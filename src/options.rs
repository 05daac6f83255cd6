use crate::constants::{DEFAULT_INDENT_UNIT, DEFAULT_INDENT_WIDTH};

/// Options controlling how formatted output is indented.
///
/// One indentation level is `unit` repeated `width` times. The defaults
/// produce four spaces per nesting level.
///
/// # Examples
/// ```
/// use jsonpad::FormatOptions;
///
/// let options = FormatOptions::new().with_width(2);
/// assert_eq!(options.width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub width: usize,
    pub unit: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_INDENT_WIDTH,
            unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}
