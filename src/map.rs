//! Ordered map type for object values.
//!
//! This module provides [`AnnoMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object entries. Order matters here: the
//! renderer emits one line group per entry, in exactly the order entries
//! were inserted.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: the same map always renders to the same lines
//! - **Caller-controlled layout**: entries appear in the order you inserted them
//! - **Stable alignment**: the alignment column is computed over a fixed entry order
//!
//! ## Examples
//!
//! ```rust
//! use serde_anno::{AnnoMap, AnnoValue};
//!
//! let mut map = AnnoMap::new();
//! map.insert("name".to_string(), AnnoValue::from("Alice"));
//! map.insert("age".to_string(), AnnoValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to renderable values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which determines the line order of rendered object entries.
///
/// # Examples
///
/// ```rust
/// use serde_anno::{AnnoMap, AnnoValue};
///
/// let mut map = AnnoMap::new();
/// map.insert("first".to_string(), AnnoValue::from(1));
/// map.insert("second".to_string(), AnnoValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnoMap(IndexMap<String, crate::AnnoValue>);

impl AnnoMap {
    /// Creates an empty `AnnoMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::AnnoMap;
    ///
    /// let map = AnnoMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        AnnoMap(IndexMap::new())
    }

    /// Creates an empty `AnnoMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AnnoMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::{AnnoMap, AnnoValue};
    ///
    /// let mut map = AnnoMap::new();
    /// assert!(map.insert("key".to_string(), AnnoValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), AnnoValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::AnnoValue) -> Option<crate::AnnoValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::AnnoValue> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::AnnoValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::AnnoValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::AnnoValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::AnnoValue>> for AnnoMap {
    fn from(map: HashMap<String, crate::AnnoValue>) -> Self {
        AnnoMap(map.into_iter().collect())
    }
}

impl From<AnnoMap> for HashMap<String, crate::AnnoValue> {
    fn from(map: AnnoMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for AnnoMap {
    type Item = (String, crate::AnnoValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::AnnoValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::AnnoValue)> for AnnoMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::AnnoValue)>>(iter: T) -> Self {
        AnnoMap(IndexMap::from_iter(iter))
    }
}
