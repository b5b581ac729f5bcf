//! Configuration options for the renderer.
//!
//! This module provides [`AnnoOptions`], the full set of knobs the renderer
//! reads: indentation width, float precision, alignment and multi-line
//! toggles, and every symbol that appears in the output.
//!
//! The defaults target markup embedding — `<br>` line breaks, `&nbsp;`
//! indent glyphs — so the joined output drops straight into an HTML page.
//! Use [`AnnoOptions::plain`] for terminal- or file-friendly output instead.
//!
//! ## Examples
//!
//! ```rust
//! use serde_anno::{to_string_with_options, AnnoOptions};
//!
//! let value = vec![1, 2];
//!
//! // Markup defaults
//! let html = to_string_with_options(&value, AnnoOptions::new()).unwrap();
//! assert_eq!(html, "[<br>&nbsp;&nbsp;&nbsp;&nbsp;1,<br>&nbsp;&nbsp;&nbsp;&nbsp;2<br>]");
//!
//! // Plain text
//! let text = to_string_with_options(&value, AnnoOptions::plain()).unwrap();
//! assert_eq!(text, "[\n    1,\n    2\n]");
//! ```

/// Configuration options for rendering.
///
/// All fields are public; construct with [`AnnoOptions::new`] /
/// [`AnnoOptions::plain`] and adjust either through the `with_*` builders or
/// struct-update syntax:
///
/// ```rust
/// use serde_anno::AnnoOptions;
///
/// let options = AnnoOptions {
///     symbol_comment: "  # ".to_string(),
///     ..AnnoOptions::plain()
/// };
/// assert_eq!(options.symbol_line_break, "\n");
/// ```
///
/// A [`Renderer`](crate::Renderer) captures its options at construction and
/// never mutates them, so one renderer can serve any number of concurrent
/// `stringify` calls.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnoOptions {
    /// Number of indent glyphs per nesting level.
    pub indent_size: usize,
    /// Reserved for tab-based layouts; the renderer does not read it.
    pub tab_size: usize,
    /// Fractional digits for non-whole numbers. Rounding at the precision
    /// boundary follows Rust's fixed-point formatting, which rounds half to
    /// even.
    pub float_precision: usize,
    /// When `true`, all values of one object start at the same column,
    /// padded to the widest quoted key among siblings.
    pub align_object_value: bool,
    /// When `true`, strings containing line breaks render as multi-line
    /// blocks delimited by [`symbol_quote_multiline`](Self::symbol_quote_multiline).
    /// When `false`, line breaks are escaped and the string stays on one line.
    pub enable_multiline_string: bool,

    /// Joins rendered lines in [`stringify`](crate::Renderer::stringify).
    pub symbol_line_break: String,
    /// One indent glyph; repeated `indent_size` times per level.
    pub symbol_indent: String,
    /// Prefixed to every trailing comment.
    pub symbol_comment: String,
    /// Literal for null values.
    pub symbol_null: String,
    /// Literal for `true`.
    pub symbol_boolean_true: String,
    /// Literal for `false`.
    pub symbol_boolean_false: String,
    /// Quote wrapped around single-line strings.
    pub symbol_quote_string: String,
    /// Delimiter opening and closing multi-line string blocks.
    pub symbol_quote_multiline: String,
    /// Separator after every child except the last.
    pub symbol_item_separate: String,
    /// Opening symbol for objects.
    pub symbol_object_start: String,
    /// Closing symbol for objects.
    pub symbol_object_end: String,
    /// Quote wrapped around object keys.
    pub symbol_object_key_quote: String,
    /// Separator between a quoted key and its value.
    pub symbol_object_key_value_split: String,
    /// Opening symbol for arrays.
    pub symbol_array_start: String,
    /// Closing symbol for arrays.
    pub symbol_array_end: String,
}

impl Default for AnnoOptions {
    fn default() -> Self {
        AnnoOptions {
            indent_size: 4,
            tab_size: 4,
            float_precision: 4,
            align_object_value: true,
            enable_multiline_string: true,

            symbol_line_break: "<br>".to_string(),
            symbol_indent: "&nbsp;".to_string(),
            symbol_comment: "  // ".to_string(),
            symbol_null: "null".to_string(),
            symbol_boolean_true: "true".to_string(),
            symbol_boolean_false: "false".to_string(),
            symbol_quote_string: "\"".to_string(),
            symbol_quote_multiline: "'''".to_string(),
            symbol_item_separate: ",".to_string(),
            symbol_object_start: "{".to_string(),
            symbol_object_end: "}".to_string(),
            symbol_object_key_quote: "\"".to_string(),
            symbol_object_key_value_split: ": ".to_string(),
            symbol_array_start: "[".to_string(),
            symbol_array_end: "]".to_string(),
        }
    }
}

impl AnnoOptions {
    /// Creates the default options (markup symbols, 4-glyph indent, aligned
    /// object values, multi-line strings enabled).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::AnnoOptions;
    ///
    /// let options = AnnoOptions::new();
    /// assert_eq!(options.indent_size, 4);
    /// assert_eq!(options.symbol_line_break, "<br>");
    /// assert!(options.align_object_value);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for plain-text output: newline line breaks and space
    /// indent glyphs. Everything else keeps the defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::AnnoOptions;
    ///
    /// let options = AnnoOptions::plain();
    /// assert_eq!(options.symbol_line_break, "\n");
    /// assert_eq!(options.symbol_indent, " ");
    /// ```
    #[must_use]
    pub fn plain() -> Self {
        AnnoOptions {
            symbol_line_break: "\n".to_string(),
            symbol_indent: " ".to_string(),
            ..Default::default()
        }
    }

    /// Sets the number of indent glyphs per nesting level.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Sets the number of fractional digits for non-whole numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::{to_string_with_options, AnnoOptions};
    ///
    /// let options = AnnoOptions::plain().with_float_precision(2);
    /// assert_eq!(to_string_with_options(&3.141, options).unwrap(), "3.14");
    /// ```
    #[must_use]
    pub fn with_float_precision(mut self, float_precision: usize) -> Self {
        self.float_precision = float_precision;
        self
    }

    /// Enables or disables object value column alignment.
    #[must_use]
    pub fn with_align_object_value(mut self, align: bool) -> Self {
        self.align_object_value = align;
        self
    }

    /// Enables or disables multi-line string blocks.
    ///
    /// When disabled, tab, newline and carriage-return characters are
    /// escaped to their two-character forms and every string renders on a
    /// single line.
    #[must_use]
    pub fn with_multiline_strings(mut self, enable: bool) -> Self {
        self.enable_multiline_string = enable;
        self
    }

    /// Sets the symbol prefixed to trailing comments.
    #[must_use]
    pub fn with_comment_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_comment = symbol.into();
        self
    }
}
