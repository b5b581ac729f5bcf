//! Output format reference.
//!
//! This module documents the text layout the renderer produces. There is no
//! parser for this format: it is a display format, built to be read by
//! humans (typically embedded in a web page with the default symbols), not
//! round-tripped by machines.
//!
//! # Overview
//!
//! Rendering produces an ordered list of physical lines, joined with the
//! configured line-break symbol (`<br>` by default, `"\n"` with
//! [`AnnoOptions::plain`](crate::AnnoOptions::plain)). Every example below
//! uses the plain symbols.
//!
//! # Scalars
//!
//! One line each:
//!
//! | Value | Output |
//! |-------|--------|
//! | Null | `null` |
//! | Boolean | `true` / `false` |
//! | Whole number (`5`, `6.0`) | `5`, `6` |
//! | Fractional number (`3.1`) | `3.1000` (fixed-point, `float_precision` digits) |
//! | String | `"quoted and escaped"` |
//! | Date | its RFC 3339 form, quoted |
//! | BigInt | its decimal digits, quoted |
//!
//! Numbers are classified by wholeness: any finite number with no fractional
//! part prints in decimal form, everything else (including `inf` and `NaN`)
//! prints through the fixed-point path.
//!
//! # String escaping
//!
//! Reserved characters become entities, in this order:
//!
//! | Character | Escape |
//! |-----------|--------|
//! | `&` | `&amp;` |
//! | `\` | `&bsol;&bsol;` |
//! | `<` | `&lt;` |
//! | `>` | `&gt;` |
//! | quote symbol | `&bsol;` + quote |
//!
//! Ampersands are escaped first so the entities introduced by later steps
//! are never re-escaped.
//!
//! A string containing line breaks renders as a multi-line block: the
//! opening delimiter on its own line, each text line verbatim, and the
//! closing delimiter appended to the last text line:
//!
//! ```text
//! '''
//! first line
//! last line'''
//! ```
//!
//! With multi-line strings disabled, `\t`, `\n` and `\r` are escaped to
//! their two-character forms and the string stays on one quoted line.
//!
//! # Arrays
//!
//! Opening bracket, one indented line group per element, closing bracket.
//! An empty array collapses to `[]` on one line.
//!
//! ```text
//! [
//!     1,
//!     2
//! ]
//! ```
//!
//! The separator follows every element except the last, on the element's
//! last physical line.
//!
//! # Objects
//!
//! Entries render in insertion order as `"key": value`. With value
//! alignment enabled (the default), every value starts at the same column,
//! padded to the widest quoted key among siblings:
//!
//! ```text
//! {
//!     "a":  1,
//!     "bb": 2
//! }
//! ```
//!
//! When an entry's value spans multiple lines, continuation lines are
//! indented to the value's start column. An empty object collapses to `{}`.
//!
//! # Comments
//!
//! A [`NoteMap`](crate::NoteMap) overlay attaches comments to children.
//! A trailing note lands on the child's *last* physical line, after the
//! item separator:
//!
//! ```text
//! [
//!     "a",  // first letter
//!     "b"
//! ]
//! ```
//!
//! A nested note carries an overlay for the child's own entries instead.
//! Overlay entries that match nothing, and nested notes addressing scalar
//! children, are silently ignored.
//!
//! # Configuration
//!
//! Every symbol above — brackets, quotes, separators, the comment lead, the
//! indent glyph, the line break — comes from
//! [`AnnoOptions`](crate::AnnoOptions) and can be replaced independently.
