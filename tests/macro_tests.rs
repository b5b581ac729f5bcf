use serde_anno::{anno, notes, AnnoMap, AnnoOptions, AnnoValue, Note, Number, Renderer};

#[test]
fn test_anno_null() {
    assert_eq!(anno!(null), AnnoValue::Null);
}

#[test]
fn test_anno_booleans() {
    assert_eq!(anno!(true), AnnoValue::Bool(true));
    assert_eq!(anno!(false), AnnoValue::Bool(false));
}

#[test]
fn test_anno_numbers() {
    assert_eq!(anno!(42), AnnoValue::Number(Number::Integer(42)));
    assert_eq!(anno!(-7), AnnoValue::Number(Number::Integer(-7)));
    assert_eq!(anno!(3.5), AnnoValue::Number(Number::Float(3.5)));
}

#[test]
fn test_anno_strings() {
    assert_eq!(anno!("hello"), AnnoValue::String("hello".to_string()));

    let name = String::from("dynamic");
    assert_eq!(anno!(name), AnnoValue::String("dynamic".to_string()));
}

#[test]
fn test_anno_arrays() {
    assert_eq!(anno!([]), AnnoValue::Array(vec![]));

    let arr = anno!([1, "two", true, null]);
    match arr {
        AnnoValue::Array(vec) => {
            assert_eq!(vec.len(), 4);
            assert_eq!(vec[0], AnnoValue::Number(Number::Integer(1)));
            assert_eq!(vec[1], AnnoValue::String("two".to_string()));
            assert_eq!(vec[2], AnnoValue::Bool(true));
            assert_eq!(vec[3], AnnoValue::Null);
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_anno_objects() {
    assert_eq!(anno!({}), AnnoValue::Object(AnnoMap::new()));

    let obj = anno!({
        "name": "Alice",
        "age": 30,
        "pets": ["cat", "dog"]
    });

    match obj {
        AnnoValue::Object(map) => {
            assert_eq!(map.len(), 3);
            assert_eq!(
                map.get("name"),
                Some(&AnnoValue::String("Alice".to_string()))
            );
            assert_eq!(map.get("age"), Some(&AnnoValue::Number(Number::Integer(30))));
            assert!(map.get("pets").unwrap().is_array());
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_anno_nested() {
    let value = anno!({
        "outer": {
            "inner": [1, 2]
        }
    });

    let outer = value.as_object().unwrap().get("outer").unwrap();
    let inner = outer.as_object().unwrap().get("inner").unwrap();
    assert_eq!(inner.as_array().unwrap().len(), 2);
}

#[test]
fn test_anno_preserves_insertion_order() {
    let value = anno!({ "z": 1, "a": 2, "m": 3 });
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_notes_empty() {
    let overlay = notes! {};
    assert!(overlay.is_empty());
}

#[test]
fn test_notes_trailing_and_nested() {
    let overlay = notes! {
        "flat" => "a trailing comment",
        "deep" => notes! { "child" => "a nested comment" },
    };

    assert_eq!(
        overlay.note_for_key("flat"),
        Some(&Note::Trailing("a trailing comment".to_string()))
    );
    match overlay.note_for_key("deep") {
        Some(Note::Nested(inner)) => assert_eq!(
            inner.note_for_key("child"),
            Some(&Note::Trailing("a nested comment".to_string()))
        ),
        other => panic!("expected nested note, got {:?}", other),
    }
}

#[test]
fn test_notes_accepts_owned_strings() {
    let key = String::from("k");
    let text = String::from("owned");
    let overlay = notes! { key => text };
    assert!(overlay.note_for_key("k").is_some());
}

#[test]
fn test_macros_compose_with_renderer() {
    let value = anno!({
        "threshold": 0.75,
        "labels": ["low", "high"]
    });
    let overlay = notes! {
        "threshold" => "tuned on the validation set",
        "labels" => notes! { "high" => "above threshold" },
    };

    let text = Renderer::new(AnnoOptions::plain()).stringify(&value, Some(&overlay));
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "{",
            "    \"threshold\": 0.7500,  // tuned on the validation set",
            "    \"labels\":    [",
            "                     \"low\",",
            "                     \"high\"  // above threshold",
            "                 ]",
            "}",
        ]
    );
}
