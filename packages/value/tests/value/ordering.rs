//! Equality and ordering tests

use safejson_value::Value;

fn incomparable_pairs() -> Vec<(Value, Value)> {
    vec![
        (Value::from("a"), Value::from(1)),
        (Value::from(true), Value::from(1)),
        (Value::NULL, Value::from(0)),
        (Value::parse("[1]"), Value::parse("[2]")),
        (Value::parse(r#"{"a":1}"#), Value::parse(r#"{"a":2}"#)),
        (Value::parse("[]"), Value::parse("{}")),
        (Value::from(true), Value::from(false)),
        (Value::invalid(), Value::invalid()),
    ]
}

#[test]
fn test_numbers_and_strings_order_naturally() {
    assert!(Value::from(1) < Value::from(2));
    assert!(Value::from(2.5) > Value::from(2));
    assert!(Value::from(-1) <= Value::from(-1.0));
    assert!(Value::from("a") < Value::from("b"));
    assert!(Value::from("b") >= Value::from("a"));
}

#[test]
fn test_incomparable_pairs_are_false_both_ways() {
    for (left, right) in incomparable_pairs() {
        assert!(!(left < right), "{left:?} < {right:?}");
        assert!(!(right < left), "{right:?} < {left:?}");
        assert!(!(left > right), "{left:?} > {right:?}");
        assert!(!(right > left), "{right:?} > {left:?}");
        assert!(!(left <= right), "{left:?} <= {right:?}");
        assert!(!(right <= left), "{right:?} <= {left:?}");
        assert!(!(left >= right), "{left:?} >= {right:?}");
        assert!(!(right >= left), "{right:?} >= {left:?}");
        assert_ne!(left, right);
    }
}

#[test]
fn test_reflexive_grants() {
    assert!(Value::NULL <= Value::NULL);
    assert!(Value::NULL >= Value::NULL);
    assert!(!(Value::NULL < Value::NULL));

    let list = Value::parse("[1, {\"a\": true}]");
    assert!(list <= list.clone());
    assert!(list >= list.clone());
    assert!(!(list < list.clone()));

    let object = Value::parse(r#"{"k": [1, 2]}"#);
    assert!(object <= object.clone());
}

#[test]
fn test_structural_equality() {
    assert_eq!(Value::parse("[1, 2]"), Value::parse("[1.0, 2]"));
    assert_ne!(Value::parse("[1, 2]"), Value::parse("[2, 1]"));
    assert_eq!(
        Value::parse(r#"{"a": 1, "b": 2}"#),
        Value::parse(r#"{"b": 2, "a": 1}"#)
    );
    assert_ne!(Value::from("1"), Value::from(1));
}
