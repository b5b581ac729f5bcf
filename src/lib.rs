//! # serde_anno
//!
//! A Serde-compatible renderer that pretty-prints values as indented,
//! comment-annotated text.
//!
//! ## What does it do?
//!
//! `serde_anno` takes any serializable value (or a dynamically built
//! [`AnnoValue`] tree) and renders it as human-readable, line-broken,
//! consistently indented text — with optional inline comments attached
//! through a side-channel overlay that mirrors the value's shape. It is a
//! one-way formatter: there is no parser for the output, which makes it
//! ideal for debug views, config dumps, documentation snippets, and
//! annotated data displays embedded in web pages.
//!
//! ## Key Features
//!
//! - **Comment overlays**: attach a trailing comment to any array element or
//!   object entry, or descend into nested children, without touching the
//!   value itself
//! - **Aligned output**: object values line up in a column, padded to the
//!   widest key among siblings
//! - **Multi-line strings**: strings containing line breaks render as
//!   fenced blocks instead of one escaped line
//! - **Markup-ready by default**: `<br>` line breaks, `&nbsp;` indentation
//!   and entity escaping drop straight into HTML; every symbol is
//!   configurable, and [`AnnoOptions::plain`] switches to newlines and spaces
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize)]`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_anno = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Rendering with annotations
//!
//! ```rust
//! use serde_anno::{anno, notes, AnnoOptions, Renderer};
//!
//! let value = anno!({
//!     "host": "localhost",
//!     "port": 8080
//! });
//! let overlay = notes! { "port" => "dev default" };
//!
//! let renderer = Renderer::new(AnnoOptions::plain());
//! let text = renderer.stringify(&value, Some(&overlay));
//! assert_eq!(
//!     text,
//!     "{\n    \"host\": \"localhost\",\n    \"port\": 8080  // dev default\n}"
//! );
//! ```
//!
//! ### Rendering serializable types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_anno::{to_string_with_options, AnnoOptions};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let text = to_string_with_options(&Point { x: 1, y: 2 }, AnnoOptions::plain()).unwrap();
//! assert_eq!(text, "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! ```
//!
//! ## Failure model
//!
//! Rendering never fails: overlay entries that match nothing and notes whose
//! shape doesn't fit their child are silently ignored, and unrecognized
//! value kinds render as text. The fallible surface is the serde bridge
//! (types with no value representation) and the writer helpers. The one
//! hard limit is recursion: depth equals the input's nesting depth, so a
//! pathologically deep tree exhausts the stack.
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full layout rules: scalars, escaping,
//! multi-line strings, separators, alignment, and comments.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Rendering a struct with the plain symbols
//! - **`annotations.rs`** - Trailing and nested comment overlays
//! - **`custom_symbols.rs`** - Re-skinning the output symbol by symbol
//! - **`dynamic_values.rs`** - Building AnnoValue trees at runtime
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod overlay;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::AnnoMap;
pub use options::AnnoOptions;
pub use overlay::{Note, NoteMap};
pub use render::Renderer;
pub use ser::AnnoValueSerializer;
pub use value::{AnnoValue, Number};

use serde::Serialize;
use std::io;

/// Render any `T: Serialize` with the default (markup) options and no
/// annotations.
///
/// # Examples
///
/// ```rust
/// use serde_anno::to_string;
///
/// assert_eq!(to_string(&5).unwrap(), "5");
/// assert_eq!(to_string(&3.1).unwrap(), "3.1000");
/// assert_eq!(
///     to_string(&vec![1, 2]).unwrap(),
///     "[<br>&nbsp;&nbsp;&nbsp;&nbsp;1,<br>&nbsp;&nbsp;&nbsp;&nbsp;2<br>]"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree
/// (e.g., data-carrying enum variants).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, AnnoOptions::default())
}

/// Render any `T: Serialize` with custom options and no annotations.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{to_string_with_options, AnnoOptions};
///
/// let text = to_string_with_options(&vec!["a"], AnnoOptions::plain()).unwrap();
/// assert_eq!(text, "[\n    \"a\"\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: AnnoOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    Ok(Renderer::new(options).stringify(&tree, None))
}

/// Render any `T: Serialize` with the default options and a comment overlay.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_annotated<T>(value: &T, notes: &NoteMap) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_annotated_with_options(value, notes, AnnoOptions::default())
}

/// Render any `T: Serialize` with custom options and a comment overlay.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_anno::{notes, to_string_annotated_with_options, AnnoOptions};
///
/// #[derive(Serialize)]
/// struct Retry { attempts: u32 }
///
/// let overlay = notes! { "attempts" => "see incident 4211" };
/// let text = to_string_annotated_with_options(
///     &Retry { attempts: 3 },
///     &overlay,
///     AnnoOptions::plain(),
/// )
/// .unwrap();
/// assert_eq!(text, "{\n    \"attempts\": 3  // see incident 4211\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_annotated_with_options<T>(
    value: &T,
    notes: &NoteMap,
    options: AnnoOptions,
) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    Ok(Renderer::new(options).stringify(&tree, Some(notes)))
}

/// Convert any `T: Serialize` to an [`AnnoValue`].
///
/// Useful for building or inspecting value trees before rendering, or for
/// mixing serialized data with manually constructed values.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{to_value, AnnoValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: AnnoValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<AnnoValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(AnnoValueSerializer)
}

/// Render any `T: Serialize` to a writer with the default options.
///
/// # Examples
///
/// ```rust
/// use serde_anno::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &5).unwrap();
/// assert_eq!(buffer, b"5");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, AnnoOptions::default())
}

/// Render any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: AnnoOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let rendered = to_string_with_options(value, options)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
    }

    #[test]
    fn test_scalars_through_the_serde_path() {
        assert_eq!(to_string(&5).unwrap(), "5");
        assert_eq!(to_string(&3.1).unwrap(), "3.1000");
        assert_eq!(to_string(&true).unwrap(), "true");
        assert_eq!(to_string(&Option::<i32>::None).unwrap(), "null");
    }

    #[test]
    fn test_empty_collections_collapse() {
        assert_eq!(to_string(&Vec::<i32>::new()).unwrap(), "[]");

        #[derive(Serialize)]
        struct Empty {}
        assert_eq!(to_string(&Empty {}).unwrap(), "{}");
    }

    #[test]
    fn test_struct_rendering() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            active: true,
        };
        let text = to_string_with_options(&user, AnnoOptions::plain()).unwrap();
        assert_eq!(
            text,
            "{\n    \"id\":     7,\n    \"name\":   \"Alice\",\n    \"active\": true\n}"
        );
    }

    #[test]
    fn test_annotated_struct_rendering() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            active: false,
        };
        let overlay = notes! { "active" => "suspended 2024-02" };
        let text =
            to_string_annotated_with_options(&user, &overlay, AnnoOptions::plain()).unwrap();
        assert!(text.ends_with("\"active\": false  // suspended 2024-02\n}"));
    }

    #[test]
    fn test_to_value_shape() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            active: true,
        };
        let value = to_value(&user).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("id").and_then(|v| v.as_i64()), Some(7));
        assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
        assert_eq!(obj.get("active").and_then(|v| v.as_bool()), Some(true));
    }

    #[test]
    fn test_writer() {
        let mut buffer = Vec::new();
        to_writer_with_options(&mut buffer, &vec![1], AnnoOptions::plain()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[\n    1\n]");
    }
}
