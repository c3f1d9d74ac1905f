//! Deep merge tests

use safejson_value::{JsonError, Value};

#[test]
fn test_disjoint_objects_union() {
    let merged = Value::parse(r#"{"a":1}"#).merged(&Value::parse(r#"{"b":2}"#));
    assert_eq!(merged, Ok(Value::parse(r#"{"a":1,"b":2}"#)));
}

#[test]
fn test_overlapping_key_takes_incoming() {
    let merged = Value::parse(r#"{"a":1}"#).merged(&Value::parse(r#"{"a":2}"#));
    assert_eq!(merged, Ok(Value::parse(r#"{"a":2}"#)));
}

#[test]
fn test_arrays_concatenate() {
    let merged = Value::parse("[1,2]").merged(&Value::parse("[3]"));
    assert_eq!(merged, Ok(Value::parse("[1,2,3]")));
}

#[test]
fn test_top_level_mismatch_fails() {
    assert_eq!(Value::from(1).merged(&Value::from("x")), Err(JsonError::WrongType));
    assert_eq!(
        Value::parse("{}").merged(&Value::parse("[]")),
        Err(JsonError::WrongType)
    );
    assert_eq!(Value::NULL.merged(&Value::parse("{}")), Err(JsonError::WrongType));
}

#[test]
fn test_nested_mismatch_overrides() {
    let merged = Value::parse(r#"{"a":1}"#).merged(&Value::parse(r#"{"a":"x"}"#));
    assert_eq!(merged, Ok(Value::parse(r#"{"a":"x"}"#)));

    let deeper = Value::parse(r#"{"a":{"b":[1],"c":{"d":1}}}"#)
        .merged(&Value::parse(r#"{"a":{"b":[2],"c":7}}"#));
    assert_eq!(deeper, Ok(Value::parse(r#"{"a":{"b":[1,2],"c":7}}"#)));
}

#[test]
fn test_same_kind_scalars_replace() {
    assert_eq!(Value::from(1).merged(&Value::from(2)), Ok(Value::from(2)));
    assert_eq!(Value::from("a").merged(&Value::from("b")), Ok(Value::from("b")));
}

#[test]
fn test_merged_leaves_inputs_alone() {
    let base = Value::parse(r#"{"a":[1],"b":{"c":1}}"#);
    let other = Value::parse(r#"{"a":[2],"b":{"d":2}}"#);
    let base_before = base.clone();
    let other_before = other.clone();

    let merged = base.merged(&other);
    assert_eq!(merged, Ok(Value::parse(r#"{"a":[1,2],"b":{"c":1,"d":2}}"#)));
    assert_eq!(base, base_before);
    assert_eq!(other, other_before);
}

#[test]
fn test_merge_in_place() {
    let mut base = Value::parse(r#"{"x":{"y":1}}"#);
    assert_eq!(base.merge(&Value::parse(r#"{"x":{"z":2}}"#)), Ok(()));
    assert_eq!(base["x"]["z"].i32(), Some(2));
    assert_eq!(base["x"]["y"].i32(), Some(1));
}
