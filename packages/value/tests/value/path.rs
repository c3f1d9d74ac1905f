//! Subscript and path tests

use std::collections::BTreeMap;

use safejson_value::{path, JsonError, Selector, Type, Value};

fn sample() -> Value {
    Value::parse(r#"{"a": {"b": 1}, "list": [10, 20, 30], "name": "x"}"#)
}

#[test]
fn test_index_out_of_bounds() {
    let doc = sample();
    let missing = &doc["list"][3];
    assert_eq!(missing.kind(), Type::Null);
    assert_eq!(missing.error(), Some(JsonError::IndexOutOfBounds));
    assert!(!missing.exists());
    assert_eq!(doc["list"][2].i32(), Some(30));
}

#[test]
fn test_missing_key() {
    let doc = sample();
    assert_eq!(doc["nope"].error(), Some(JsonError::NotExist));
    assert_eq!(doc["nope"].kind(), Type::Null);
    assert!(doc["a"].exists());
}

#[test]
fn test_wrong_container_kind() {
    let doc = sample();
    assert_eq!(doc[0].error(), Some(JsonError::WrongType));
    assert_eq!(doc["list"]["key"].error(), Some(JsonError::WrongType));
    assert_eq!(doc["name"][0].error(), Some(JsonError::WrongType));
}

#[test]
fn test_errors_propagate_along_chains() {
    let doc = sample();
    assert_eq!(doc["nope"]["deeper"][4].error(), Some(JsonError::NotExist));
    assert_eq!(doc["list"][9]["x"].error(), Some(JsonError::IndexOutOfBounds));
}

#[test]
fn test_explicit_null_exists() {
    let doc = Value::parse(r#"{"n": null}"#);
    assert_eq!(doc["n"].kind(), Type::Null);
    assert!(doc["n"].exists());
    assert!(!doc["m"].exists());
}

#[test]
fn test_path_read_is_a_fold() {
    let doc = sample();
    assert_eq!(doc.get_path(&path!["a", "b"]).i32(), Some(1));
    assert_eq!(doc.get_path(&path!["list", 1]).i32(), Some(20));
    assert_eq!(doc.get_path(&path!["a", "c", "d"]).error(), Some(JsonError::NotExist));
    let empty: Vec<Selector> = Vec::new();
    assert_eq!(doc.get_path(&empty), &doc);
    assert_eq!(doc[&path!["list", 0][..]].i32(), Some(10));
}

#[test]
fn test_path_write_replaces_existing() {
    let mut doc = Value::parse(r#"{"a": {"b": 1}}"#);
    assert!(doc.set_path(&path!["a", "b"], Value::from(2)));
    assert_eq!(doc, Value::parse(r#"{"a": {"b": 2}}"#));
}

#[test]
fn test_path_write_through_index_step() {
    let mut doc = Value::parse(r#"{"l": [{"x": 1}, {"x": 2}]}"#);
    assert!(doc.set_path(&path!["l", 1, "x"], Value::from("two")));
    assert_eq!(doc, Value::parse(r#"{"l": [{"x": 1}, {"x": "two"}]}"#));

    let before = doc.clone();
    assert!(!doc.set_path(&path!["l", 5, "x"], Value::from(3)));
    assert!(!doc.set_path(&path!["l", 0, "y"], Value::from(3)));
    assert!(!doc.set_path(&path!["l", "x"], Value::from(3)));
    assert_eq!(doc, before);
}

#[test]
fn test_path_write_never_creates() {
    let mut doc = Value::parse(r#"{"a": {"b": 1}}"#);
    let before = doc.clone();
    assert!(!doc.set_path(&path!["a", "c"], Value::from(2)));
    assert!(!doc.set_path(&path!["x", "y"], Value::from(2)));
    assert!(!doc.set_path(&[], Value::from(2)));
    assert_eq!(doc, before);
}

#[test]
fn test_single_step_write_rules() {
    let mut list = Value::parse("[1, 2]");
    assert!(list.set(&Selector::from(1), Value::from("two")));
    assert!(!list.set(&Selector::from(2), Value::from(3)));
    assert!(!list.set(&Selector::from("k"), Value::from(3)));
    assert_eq!(list, Value::parse(r#"[1, "two"]"#));

    let errored = Value::parse("{}")["missing"].clone();
    assert!(!list.set(&Selector::from(0), errored));
    assert_eq!(list[0].i32(), Some(1));

    let mut scalar = Value::from(5);
    assert!(!scalar.set(&Selector::from(0), Value::from(1)));
    assert_eq!(scalar.i32(), Some(5));
}

#[test]
fn test_explicit_growth() {
    let mut doc = Value::parse(r#"{"items": []}"#);
    if let Some(items) = doc.get_mut(&Selector::from("items")) {
        assert!(items.push(Value::from(1)));
    }
    assert!(doc.insert("count", Value::from(1)));
    assert!(!doc.push(Value::from(1)));
    assert_eq!(doc, Value::parse(r#"{"items": [1], "count": 1}"#));
}

#[test]
fn test_iteration_pairs() {
    let list = Value::parse(r#"["a", "b"]"#);
    let pairs: Vec<(String, String)> = list
        .iter()
        .map(|(index, item)| (index, item.string_value()))
        .collect();
    assert_eq!(
        pairs,
        vec![("0".to_owned(), "a".to_owned()), ("1".to_owned(), "b".to_owned())]
    );

    let object = Value::parse(r#"{"x": 1, "y": 2}"#);
    let entries: BTreeMap<String, i64> = (&object)
        .into_iter()
        .map(|(key, item)| (key, item.i64_value()))
        .collect();
    assert_eq!(entries, BTreeMap::from([("x".to_owned(), 1), ("y".to_owned(), 2)]));

    assert_eq!(Value::from(3).iter().count(), 0);
    assert_eq!(object.iter().len(), 2);
}
