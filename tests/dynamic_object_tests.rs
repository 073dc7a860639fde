//! Integration tests for the stateful `DynamicObject` wrapper.

use objquill::{BuildError, DynamicObject, KeyPathError, Value};
use serde_json::json;

/// Renders the held object as a `serde_json::Value` for comparison.
fn snapshot(doc: &DynamicObject) -> serde_json::Value {
    serde_json::to_value(doc.get_object()).unwrap()
}

#[test]
fn test_simple_string_value() {
    let mut doc = DynamicObject::new();
    doc.set("foo:string", "bar").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": "bar"}));
}

#[test]
fn test_nested_object_structure() {
    let mut doc = DynamicObject::new();
    doc.set("foo:object.bar:string", "baz").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": {"bar": "baz"}}));
}

#[test]
fn test_array_within_object() {
    let mut doc = DynamicObject::new();
    doc.set("foo:array", "bar").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": ["bar"]}));
}

#[test]
fn test_nested_array_inside_object() {
    let mut doc = DynamicObject::new();
    doc.set("foo:object.bar:array", "baz").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": {"bar": ["baz"]}}));
}

#[test]
fn test_append_to_existing_array() {
    let mut doc = DynamicObject::with_object(Value::from(json!({"foo": ["bar"]})));
    doc.set("foo:array", "baz").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": ["bar", "baz"]}));
}

#[test]
fn test_deeply_nested_object() {
    let mut doc = DynamicObject::new();
    doc.set("foo:object.bar:object.baz:string", "qux").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": {"bar": {"baz": "qux"}}}));
}

#[test]
fn test_boolean_and_number_values() {
    let mut doc = DynamicObject::new();
    doc.set("flag:boolean", true).unwrap();
    doc.set("count:number", 42).unwrap();
    assert_eq!(snapshot(&doc), json!({"flag": true, "count": 42}));
}

#[test]
fn test_arrays_and_objects_mixed() {
    let mut doc = DynamicObject::new();
    doc.set("foo:object.bar:array.baz:object.qux:string", "test")
        .unwrap();
    assert_eq!(
        snapshot(&doc),
        json!({"foo": {"bar": [{"baz": {"qux": "test"}}]}})
    );
}

#[test]
fn test_append_in_deeply_nested_array() {
    let starter = Value::from(json!({"foo": {"bar": [{"baz": {"qux": "test"}}]}}));
    let mut doc = DynamicObject::with_object(starter);
    doc.set("foo:object.bar:array.baz:object.qux:string", "new-test")
        .unwrap();
    assert_eq!(
        snapshot(&doc),
        json!({"foo": {"bar": [
            {"baz": {"qux": "test"}},
            {"baz": {"qux": "new-test"}}
        ]}})
    );
}

#[test]
fn test_append_entry_next_to_existing_entry() {
    let mut doc = DynamicObject::from(Value::from(json!({"foo": [{"bar": "initial"}]})));
    doc.set("foo:array.bar:string", "second").unwrap();
    assert_eq!(
        snapshot(&doc),
        json!({"foo": [{"bar": "initial"}, {"bar": "second"}]})
    );
}

#[test]
fn test_entry_created_in_empty_array() {
    let mut doc = DynamicObject::with_object(Value::from(json!({"foo": []})));
    doc.set("foo:array.bar:string", "new-bar").unwrap();
    assert_eq!(snapshot(&doc), json!({"foo": [{"bar": "new-bar"}]}));
}

#[test]
fn test_set_returns_current_object() {
    let mut doc = DynamicObject::new();
    let returned = doc.set("a:string", "x").unwrap().clone();
    assert_eq!(&returned, doc.get_object());
}

#[test]
fn test_get_object_is_stable_without_set() {
    let mut doc = DynamicObject::new();
    doc.set("a:array.b:string", "x").unwrap();
    let first = doc.get_object().clone();
    let second = doc.get_object().clone();
    assert_eq!(first, second);
}

#[test]
fn test_absent_value_is_null() {
    let mut doc = DynamicObject::new();
    doc.set("a:string", None::<Value>).unwrap();
    doc.set("b:array", None::<Value>).unwrap();
    assert_eq!(snapshot(&doc), json!({"a": null, "b": [null]}));
}

#[test]
fn test_container_values_are_stored_whole() {
    let mut doc = DynamicObject::new();
    doc.set("items:array", Value::from(json!({"id": 1, "tags": ["x"]})))
        .unwrap();
    assert_eq!(snapshot(&doc), json!({"items": [{"id": 1, "tags": ["x"]}]}));
}

#[test]
fn test_failed_set_keeps_previous_state() {
    let mut doc = DynamicObject::new();
    doc.set("a:string", "x").unwrap();

    let err = doc.set("b:weird", "y").unwrap_err();
    assert!(matches!(
        err,
        BuildError::Path(KeyPathError::UnsupportedSegmentType { .. })
    ));
    assert_eq!(snapshot(&doc), json!({"a": "x"}));
}

#[test]
fn test_non_object_root_rejects_set() {
    let mut doc = DynamicObject::with_object(Value::from("scalar"));
    let err = doc.set("a:string", "x").unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidTarget {
            key: None,
            found: "string"
        }
    );
}

#[test]
fn test_into_inner_returns_built_value() {
    let mut doc = DynamicObject::default();
    doc.set("a:array", 1).unwrap();
    doc.set("a:array", 2).unwrap();
    let value = doc.into_inner();
    assert_eq!(value.to_json_compact().unwrap(), r#"{"a":[1,2]}"#);
}
