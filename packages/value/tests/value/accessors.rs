//! Typed accessor tests

use safejson_value::{Number, Type, Value};

#[test]
fn test_bool_value_coercion() {
    assert!(Value::from("YES").bool_value());
    assert!(Value::from("true").bool_value());
    assert!(Value::from("T").bool_value());
    assert!(Value::from("y").bool_value());
    assert!(Value::from("1").bool_value());
    assert!(!Value::from("maybe").bool_value());
    assert!(!Value::from("0").bool_value());
    assert!(Value::from(2).bool_value());
    assert!(!Value::from(0.0).bool_value());
    assert!(!Value::NULL.bool_value());
    assert!(!Value::parse("[true]").bool_value());
}

#[test]
fn test_string_value_coercion() {
    assert_eq!(Value::from(42).string_value(), "42");
    assert_eq!(Value::from(2.5).string_value(), "2.5");
    assert_eq!(Value::from(false).string_value(), "false");
    assert_eq!(Value::NULL.string_value(), "");
    assert_eq!(Value::parse(r#"{"a":1}"#).string_value(), "");
}

#[test]
fn test_number_value_coercion() {
    assert_eq!(Value::from("12").i32_value(), 12);
    assert_eq!(Value::from(" -3.5 ").f64_value(), -3.5);
    assert_eq!(Value::from("twelve").i32_value(), 0);
    assert_eq!(Value::from(true).u8_value(), 1);
    assert_eq!(Value::NULL.number_value(), Number::ZERO);
    assert_eq!(Value::parse("[1]").i64_value(), 0);
}

#[test]
fn test_optional_accessors_require_matching_kind() {
    let text = Value::from("5");
    assert_eq!(text.str(), Some("5"));
    assert_eq!(text.i32(), None);
    assert_eq!(text.bool(), None);

    let number = Value::from(5);
    assert_eq!(number.str(), None);
    assert_eq!(number.u64(), Some(5));
    assert_eq!(number.f32(), Some(5.0));

    assert!(Value::NULL.array().is_none());
    assert!(Value::parse("[]").array().is_some());
    assert!(Value::parse("{}").object().is_some());
}

#[test]
fn test_integer_widths_truncate_like_casts() {
    let big = Value::from(300);
    assert_eq!(big.u8(), Some(44));
    assert_eq!(big.i16(), Some(300));
    assert_eq!(Value::from(1.99).isize(), Some(1));
    assert_eq!(Value::from(-1).usize_value(), usize::MAX);
}

#[test]
fn test_setters_change_kind() {
    let mut value = Value::from("x");
    value.set_i64(-9);
    assert_eq!(value.kind(), Type::Number);
    assert_eq!(value.i64(), Some(-9));

    value.set_bool(true);
    assert_eq!(value.kind(), Type::Bool);

    value.set_object([("k", Value::from(1))]);
    assert_eq!(value["k"].i32(), Some(1));

    value.set_array(vec![Value::from(1), Value::from(2)]);
    assert_eq!(value.len(), 2);
    assert_eq!(value.array_value().len(), 2);
    assert!(value.object_value().is_empty());
}
