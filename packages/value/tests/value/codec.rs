//! Structured encode/decode bridge tests

use safejson_value::{Type, Value};
use serde::{Deserialize, Serialize};

#[test]
fn test_encoding_keeps_integers() {
    let doc = Value::parse(r#"{"n": 1, "f": 1.5, "neg": -3}"#);
    let text = serde_json::to_string(&doc["n"]).unwrap_or_default();
    assert_eq!(text, "1");
    assert_eq!(serde_json::to_string(&doc["neg"]).unwrap_or_default(), "-3");
    assert_eq!(serde_json::to_string(&doc["f"]).unwrap_or_default(), "1.5");
}

#[test]
fn test_invalid_and_null_encode_as_null() {
    assert_eq!(serde_json::to_string(&Value::invalid()).unwrap_or_default(), "null");
    assert_eq!(serde_json::to_string(&Value::NULL).unwrap_or_default(), "null");
}

#[test]
fn test_decode_into_value() {
    let value: Value = serde_json::from_str(r#"[true, 7, "s", {"k": null}]"#).unwrap_or_default();
    assert_eq!(value[0].bool(), Some(true));
    assert_eq!(value[1].u8(), Some(7));
    assert_eq!(value[2].str(), Some("s"));
    assert_eq!(value[3]["k"].kind(), Type::Null);
}

#[test]
fn test_value_as_struct_field() {
    #[derive(Serialize, Deserialize)]
    struct Envelope {
        id: u32,
        payload: Value,
    }

    let envelope: Envelope = serde_json::from_str(r#"{"id": 9, "payload": {"deep": [1, 2]}}"#)
        .expect("envelope should decode");
    assert_eq!(envelope.id, 9);
    assert_eq!(envelope.payload["deep"][1].i32(), Some(2));

    let again = Value::new(&envelope);
    assert_eq!(again["payload"]["deep"], Value::parse("[1, 2]"));
}

#[test]
fn test_raw_tree_round_trip() {
    let raw = serde_json::json!({"a": [1, "two", false, null], "b": {"c": -1.5}});
    let value = Value::from(raw.clone());
    assert_eq!(value.to_raw(), Some(raw));
}
