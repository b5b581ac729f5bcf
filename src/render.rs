//! The rendering engine.
//!
//! This module provides [`Renderer`], which turns an [`AnnoValue`] tree and
//! an optional [`NoteMap`] overlay into formatted text.
//!
//! ## Overview
//!
//! Every value renders to a non-empty list of physical lines:
//!
//! - **Scalars** render to one line: decimal integers, fixed-point floats,
//!   the configured boolean/null literals, or a quoted escaped string.
//! - **Arrays and objects** render to an opening-symbol line, one indented
//!   line group per child, and a closing-symbol line. Empty containers
//!   collapse to a single `[]` / `{}` line.
//! - **Comments** from the overlay attach to the *last* physical line of the
//!   child they address, after the item separator.
//! - **Multi-line strings** (when enabled) render as a delimiter line,
//!   the text lines verbatim, and the closing delimiter on the final text
//!   line.
//!
//! [`Renderer::stringify`] joins the lines with the configured line-break
//! symbol; [`Renderer::render`] exposes the raw lines.
//!
//! ## Usage
//!
//! ```rust
//! use serde_anno::{anno, notes, AnnoOptions, Renderer};
//!
//! let renderer = Renderer::new(AnnoOptions::plain());
//! let value = anno!({ "retries": 3, "backoff": 1.5 });
//! let notes = notes! { "retries" => "per attempt" };
//!
//! let out = renderer.stringify(&value, Some(&notes));
//! assert_eq!(
//!     out,
//!     "{\n    \"retries\": 3,  // per attempt\n    \"backoff\": 1.5000\n}"
//! );
//! ```
//!
//! ## Purity and recursion
//!
//! Rendering is a pure function of the value, the overlay, and the options
//! captured at construction: no I/O, no shared mutable state, and identical
//! inputs always produce identical output. Recursion depth equals the
//! nesting depth of the input, so a pathologically deep tree exhausts the
//! stack before anything else goes wrong; the owned [`AnnoValue`] tree
//! cannot express cycles.

use crate::{AnnoMap, AnnoOptions, AnnoValue, Note, NoteMap, Number};

/// Renders values as indented, comment-annotated lines.
///
/// A renderer captures an immutable [`AnnoOptions`] at construction. It
/// holds no other state, so a single instance can be shared freely and used
/// from multiple threads at once.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{AnnoOptions, AnnoValue, Renderer};
///
/// let renderer = Renderer::new(AnnoOptions::plain());
/// assert_eq!(renderer.stringify(&AnnoValue::from(5), None), "5");
/// assert_eq!(renderer.stringify(&AnnoValue::from(3.1), None), "3.1000");
/// assert_eq!(renderer.stringify(&AnnoValue::Array(vec![]), None), "[]");
/// ```
#[derive(Clone, Debug)]
pub struct Renderer {
    options: AnnoOptions,
}

impl Renderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub fn new(options: AnnoOptions) -> Self {
        Renderer { options }
    }

    /// Returns the options this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &AnnoOptions {
        &self.options
    }

    /// Renders a value to a single string, joining lines with the configured
    /// line-break symbol.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::{anno, AnnoOptions, Renderer};
    ///
    /// let renderer = Renderer::new(AnnoOptions::plain());
    /// let out = renderer.stringify(&anno!([1, 2]), None);
    /// assert_eq!(out, "[\n    1,\n    2\n]");
    /// ```
    #[must_use]
    pub fn stringify(&self, value: &AnnoValue, notes: Option<&NoteMap>) -> String {
        self.render(value, notes).join(&self.options.symbol_line_break)
    }

    /// Renders a value to its physical lines.
    ///
    /// This is the recursive entry point: array and object rendering call
    /// back into it for every child. The returned list is never empty.
    ///
    /// Overlay entries that don't fit the value's shape (a nested note
    /// addressing a scalar, a key that matches nothing) are ignored.
    #[must_use]
    pub fn render(&self, value: &AnnoValue, notes: Option<&NoteMap>) -> Vec<String> {
        match value {
            AnnoValue::Null => vec![self.options.symbol_null.clone()],
            AnnoValue::Bool(true) => vec![self.options.symbol_boolean_true.clone()],
            AnnoValue::Bool(false) => vec![self.options.symbol_boolean_false.clone()],
            AnnoValue::Number(n) => vec![self.format_number(n)],
            AnnoValue::String(s) => self.render_text(s),
            AnnoValue::Array(items) => self.render_array(items, notes),
            AnnoValue::Object(map) => self.render_object(map, notes),
            AnnoValue::Date(dt) => self.render_text(&dt.to_rfc3339()),
            AnnoValue::BigInt(bi) => self.render_text(&bi.to_string()),
        }
    }

    /// Whole numbers print in decimal form, everything else in fixed-point
    /// form with `float_precision` fractional digits.
    fn format_number(&self, number: &Number) -> String {
        match number {
            Number::Integer(i) => i.to_string(),
            n if n.is_whole() => format!("{}", n.as_f64()),
            n => format!("{:.prec$}", n.as_f64(), prec = self.options.float_precision),
        }
    }

    /// Escapes reserved characters. The order is significant: ampersands
    /// first (every later entity introduces one), the quote symbol last.
    fn escape(&self, text: &str) -> String {
        let mut escaped = text.replace('&', "&amp;");
        escaped = escaped.replace('\\', "&bsol;&bsol;");
        escaped = escaped.replace('<', "&lt;");
        escaped = escaped.replace('>', "&gt;");
        let quote = &self.options.symbol_quote_string;
        if !quote.is_empty() {
            escaped = escaped.replace(quote.as_str(), &format!("&bsol;{}", quote));
        }
        escaped
    }

    fn render_text(&self, text: &str) -> Vec<String> {
        let quote = &self.options.symbol_quote_string;
        let escaped = self.escape(text);

        if !self.options.enable_multiline_string {
            let flat = escaped
                .replace('\t', "\\t")
                .replace('\n', "\\n")
                .replace('\r', "\\r");
            return vec![format!("{}{}{}", quote, flat, quote)];
        }

        let lines: Vec<&str> = escaped
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        if lines.len() == 1 {
            return vec![format!("{}{}{}", quote, lines[0], quote)];
        }

        let fence = &self.options.symbol_quote_multiline;
        let mut output = vec![fence.clone()];
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            if i == last {
                output.push(format!("{}{}", line, fence));
            } else {
                output.push((*line).to_string());
            }
        }
        output
    }

    fn render_array(&self, items: &[AnnoValue], notes: Option<&NoteMap>) -> Vec<String> {
        if items.is_empty() {
            return vec![format!(
                "{}{}",
                self.options.symbol_array_start, self.options.symbol_array_end
            )];
        }

        let indent = self.options.symbol_indent.repeat(self.options.indent_size);
        let mut output = vec![self.options.symbol_array_start.clone()];
        let last = items.len() - 1;
        for (i, item) in items.iter().enumerate() {
            let note = notes.and_then(|n| n.note_for_element(item));
            let rendered = match note {
                Some(Note::Nested(nested)) => self.render(item, Some(nested)),
                _ => self.render(item, None),
            };

            let last_line = rendered.len() - 1;
            for (j, rendered_line) in rendered.into_iter().enumerate() {
                let mut line = format!("{}{}", indent, rendered_line);
                if j == last_line {
                    if i != last {
                        line.push_str(&self.options.symbol_item_separate);
                    }
                    if let Some(Note::Trailing(comment)) = note {
                        line.push_str(&self.options.symbol_comment);
                        line.push_str(comment);
                    }
                }
                output.push(line);
            }
        }

        output.push(self.options.symbol_array_end.clone());
        output
    }

    fn render_object(&self, map: &AnnoMap, notes: Option<&NoteMap>) -> Vec<String> {
        if map.is_empty() {
            return vec![format!(
                "{}{}",
                self.options.symbol_object_start, self.options.symbol_object_end
            )];
        }

        let key_quote = &self.options.symbol_object_key_quote;
        let quote_width = key_quote.chars().count();
        let split_width = self.options.symbol_object_key_value_split.chars().count();

        // Widest quoted key among siblings; the column all values start at.
        let align_width = if self.options.align_object_value {
            map.keys()
                .map(|key| key.chars().count() + 2 * quote_width)
                .max()
                .unwrap_or(0)
        } else {
            0
        };

        let mut output = vec![self.options.symbol_object_start.clone()];
        let last = map.len() - 1;
        for (i, (key, value)) in map.iter().enumerate() {
            let note = notes.and_then(|n| n.note_for_key(key));
            let rendered = match note {
                Some(Note::Nested(nested)) => self.render(value, Some(nested)),
                _ => self.render(value, None),
            };

            let quoted_key = format!("{}{}{}", key_quote, key, key_quote);
            let key_width = quoted_key.chars().count();

            let mut current = self.options.symbol_indent.repeat(self.options.indent_size);
            current.push_str(&quoted_key);
            current.push_str(&self.options.symbol_object_key_value_split);

            // Continuation lines line up under the value's first line.
            let continuation_width = self.options.indent_size
                + split_width
                + if self.options.align_object_value {
                    align_width
                } else {
                    key_width
                };

            let last_line = rendered.len() - 1;
            for (j, rendered_line) in rendered.into_iter().enumerate() {
                if j == 0 {
                    if self.options.align_object_value {
                        current.push_str(
                            &self.options.symbol_indent.repeat(align_width - key_width),
                        );
                    }
                    current.push_str(&rendered_line);
                } else {
                    current = format!(
                        "{}{}",
                        self.options.symbol_indent.repeat(continuation_width),
                        rendered_line
                    );
                }
                if j != last_line {
                    output.push(std::mem::take(&mut current));
                }
            }

            if i != last {
                current.push_str(&self.options.symbol_item_separate);
            }
            if let Some(Note::Trailing(comment)) = note {
                current.push_str(&self.options.symbol_comment);
                current.push_str(comment);
            }
            output.push(current);
        }

        output.push(self.options.symbol_object_end.clone());
        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(AnnoOptions::default())
    }
}
