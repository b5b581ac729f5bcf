//! Comment overlays.
//!
//! An overlay is a side-channel structure shaped like the value it annotates.
//! It never changes what gets rendered, only what gets written next to it:
//! each entry either attaches a trailing comment to one child's last rendered
//! line, or descends into that child's own children.
//!
//! ## Core Types
//!
//! - [`Note`]: one annotation — either [`Note::Trailing`] (a comment suffixed
//!   to the child's last line) or [`Note::Nested`] (an overlay for the
//!   child's own entries)
//! - [`NoteMap`]: a keyed collection of notes for one array or object
//!
//! ## Addressing children
//!
//! Object entries are addressed by key. Array elements are addressed either
//! by their exact value or by their textual form ([`AnnoValue`]'s `Display`),
//! whichever is found first:
//!
//! ```rust
//! use serde_anno::{AnnoValue, Note, NoteMap, Renderer, AnnoOptions};
//!
//! let mut notes = NoteMap::new();
//! notes.insert("b", "the important one");
//!
//! let value = AnnoValue::Array(vec![AnnoValue::from("a"), AnnoValue::from("b")]);
//! let out = Renderer::new(AnnoOptions::plain()).stringify(&value, Some(&notes));
//! assert!(out.contains("\"b\"  // the important one"));
//! ```
//!
//! ## Shape mismatches
//!
//! Overlays are best-effort: a nested note attached to a scalar child, or a
//! key that matches nothing, simply produces no comment. Nothing errors.

use crate::AnnoValue;
use indexmap::IndexMap;

/// A single annotation for one child of an array or object.
///
/// The two variants correspond to the two things a comment can do: decorate
/// the child's last rendered line, or carry comments for the child's own
/// children (only meaningful when the child is itself an array or object —
/// a `Nested` note on a scalar child is silently ignored).
///
/// # Examples
///
/// ```rust
/// use serde_anno::{notes, Note, NoteMap};
///
/// let trailing = Note::from("explains this entry");
/// let nested = Note::from(notes! { "inner" => "explains a grandchild" });
///
/// assert!(matches!(trailing, Note::Trailing(_)));
/// assert!(matches!(nested, Note::Nested(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Note {
    /// A comment rendered after the child's last line, prefixed by the
    /// configured comment symbol.
    Trailing(String),
    /// Comments for the child's own entries.
    Nested(NoteMap),
}

impl From<&str> for Note {
    fn from(text: &str) -> Self {
        Note::Trailing(text.to_string())
    }
}

impl From<String> for Note {
    fn from(text: String) -> Self {
        Note::Trailing(text)
    }
}

impl From<NoteMap> for Note {
    fn from(notes: NoteMap) -> Self {
        Note::Nested(notes)
    }
}

/// A keyed collection of notes for one array or object.
///
/// Entries live in two keyspaces. Text keys address object entries by key
/// and array elements by textual form; value keys address array elements by
/// exact match. Value keys take priority for arrays and are never consulted
/// for objects.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{AnnoValue, Note, NoteMap};
///
/// let mut notes = NoteMap::new();
/// notes.insert("port", "from the deploy config");
/// notes.insert_value(AnnoValue::from(8080), "the default");
///
/// assert_eq!(notes.len(), 2);
/// assert!(notes.note_for_key("port").is_some());
/// assert!(notes.note_for_element(&AnnoValue::from(8080)).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NoteMap {
    keyed: IndexMap<String, Note>,
    valued: Vec<(AnnoValue, Note)>,
}

impl NoteMap {
    /// Creates an empty `NoteMap`.
    #[must_use]
    pub fn new() -> Self {
        NoteMap {
            keyed: IndexMap::new(),
            valued: Vec::new(),
        }
    }

    /// Inserts a note under a text key.
    ///
    /// Text keys match object entries by key, and array elements by textual
    /// form (so `"8080"` annotates the number `8080` in an array).
    ///
    /// If the key was already present, the old note is replaced and returned.
    pub fn insert(&mut self, key: impl Into<String>, note: impl Into<Note>) -> Option<Note> {
        self.keyed.insert(key.into(), note.into())
    }

    /// Inserts a note keyed by exact value.
    ///
    /// Value keys only participate in array lookups, where they are tried
    /// before the textual fallback. Lookup is a linear scan over value
    /// entries ([`AnnoValue`] holds floats and therefore is not hashable);
    /// overlays are small, so this stays cheap.
    pub fn insert_value(&mut self, key: AnnoValue, note: impl Into<Note>) {
        self.valued.push((key, note.into()));
    }

    /// Looks up the note for an object entry. Exact key match only.
    #[must_use]
    pub fn note_for_key(&self, key: &str) -> Option<&Note> {
        self.keyed.get(key)
    }

    /// Looks up the note for an array element.
    ///
    /// Tries exact value entries first, then falls back to the element's
    /// textual form (its `Display` output) against the text keys. String
    /// elements therefore match text keys directly.
    #[must_use]
    pub fn note_for_element(&self, element: &AnnoValue) -> Option<&Note> {
        self.valued
            .iter()
            .find(|(key, _)| key == element)
            .map(|(_, note)| note)
            .or_else(|| self.keyed.get(&element.to_string()))
    }

    /// Returns the total number of notes, across both keyspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keyed.len() + self.valued.len()
    }

    /// Returns `true` if the map contains no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyed.is_empty() && self.valued.is_empty()
    }
}

impl FromIterator<(String, Note)> for NoteMap {
    fn from_iter<T: IntoIterator<Item = (String, Note)>>(iter: T) -> Self {
        NoteMap {
            keyed: IndexMap::from_iter(iter),
            valued: Vec::new(),
        }
    }
}
