/// Builds an [`AnnoValue`](crate::AnnoValue) from a JSON-like literal.
///
/// ```rust
/// use serde_anno::anno;
///
/// let value = anno!({
///     "name": "Alice",
///     "scores": [1, 2, 3],
///     "active": true
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! anno {
    // Handle null
    (null) => {
        $crate::AnnoValue::Null
    };

    // Handle true
    (true) => {
        $crate::AnnoValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::AnnoValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::AnnoValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::AnnoValue::Array(vec![$($crate::anno!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::AnnoValue::Object($crate::AnnoMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::AnnoMap::new();
        $(
            object.insert($key.to_string(), $crate::anno!($value));
        )*
        $crate::AnnoValue::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::AnnoValue::Null)
    }};
}

/// Builds a [`NoteMap`](crate::NoteMap) overlay from `key => note` pairs.
///
/// A note is either a string (a trailing comment) or another `notes!`
/// invocation (comments for the child's own entries):
///
/// ```rust
/// use serde_anno::{notes, Note};
///
/// let overlay = notes! {
///     "host" => "where we listen",
///     "limits" => notes! {
///         "burst" => "per second",
///     },
/// };
/// assert!(matches!(overlay.note_for_key("host"), Some(Note::Trailing(_))));
/// assert!(matches!(overlay.note_for_key("limits"), Some(Note::Nested(_))));
/// ```
#[macro_export]
macro_rules! notes {
    () => {
        $crate::NoteMap::new()
    };

    ( $($key:expr => $note:expr),* $(,)? ) => {{
        let mut map = $crate::NoteMap::new();
        $(
            map.insert($key, $crate::Note::from($note));
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::{AnnoMap, AnnoValue, Note, NoteMap, Number};

    #[test]
    fn test_anno_macro_primitives() {
        assert_eq!(anno!(null), AnnoValue::Null);
        assert_eq!(anno!(true), AnnoValue::Bool(true));
        assert_eq!(anno!(false), AnnoValue::Bool(false));
        assert_eq!(anno!(42), AnnoValue::Number(Number::Integer(42)));
        assert_eq!(anno!(3.5), AnnoValue::Number(Number::Float(3.5)));
        assert_eq!(anno!("hello"), AnnoValue::String("hello".to_string()));
    }

    #[test]
    fn test_anno_macro_arrays() {
        assert_eq!(anno!([]), AnnoValue::Array(vec![]));

        let arr = anno!([1, 2, 3]);
        match arr {
            AnnoValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], AnnoValue::Number(Number::Integer(1)));
                assert_eq!(vec[1], AnnoValue::Number(Number::Integer(2)));
                assert_eq!(vec[2], AnnoValue::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_anno_macro_objects() {
        assert_eq!(anno!({}), AnnoValue::Object(AnnoMap::new()));

        let obj = anno!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            AnnoValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&AnnoValue::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&AnnoValue::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_notes_macro() {
        let empty = notes! {};
        assert!(empty.is_empty());

        let overlay = notes! {
            "a" => "first",
            "b" => notes! { "c" => "nested" },
        };
        assert_eq!(
            overlay.note_for_key("a"),
            Some(&Note::Trailing("first".to_string()))
        );
        match overlay.note_for_key("b") {
            Some(Note::Nested(inner)) => {
                assert!(inner.note_for_key("c").is_some());
            }
            other => panic!("expected nested note, got {:?}", other),
        }
        let _: &NoteMap = &overlay;
    }
}
