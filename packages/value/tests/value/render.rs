//! Rendering tests

use safejson_value::{JsonError, RenderOptions, TextEncoding, Value};

fn two_levels() -> Value {
    Value::parse(r#"{"outer": {"inner": 1}}"#)
}

#[test]
fn test_depth_limit_on_encoder_path() {
    let shallow = RenderOptions::default().max_depth(1);
    assert_eq!(two_levels().render(&shallow), Err(JsonError::ElementTooDeep));
    assert!(two_levels().render(&RenderOptions::default()).is_ok());
}

#[test]
fn test_depth_limit_on_manual_path() {
    let shallow = RenderOptions::default().cast_null(true).max_depth(1);
    assert_eq!(two_levels().render(&shallow), Err(JsonError::ElementTooDeep));

    let roomy = RenderOptions::default().cast_null(true);
    assert_eq!(
        two_levels().render(&roomy).as_deref(),
        Ok(r#"{"outer": {"inner": 1}}"#)
    );
}

#[test]
fn test_compact_encoder_output() {
    let doc = Value::parse(r#"{"b": [1, 2.5, null], "a": "x"}"#);
    let text = doc.render(&RenderOptions::compact());
    assert_eq!(text.as_deref(), Ok(r#"{"a":"x","b":[1,2.5,null]}"#));
    assert_eq!(Value::parse(&text.unwrap_or_default()), doc);
}

#[test]
fn test_pretty_output_reparses() {
    let doc = Value::parse(r#"{"list": [1, {"k": "v"}]}"#);
    let text = doc.raw_string().unwrap_or_default();
    assert!(text.contains('\n'));
    assert_eq!(Value::parse(&text), doc);
}

#[test]
fn test_scalars_render_as_text() {
    let options = RenderOptions::default();
    assert_eq!(Value::from("plain \"text\"").render(&options).as_deref(), Ok("plain \"text\""));
    assert_eq!(Value::from(3).render(&options).as_deref(), Ok("3"));
    assert_eq!(Value::from(1.0).render(&options).as_deref(), Ok("1"));
    assert_eq!(Value::from(false).render(&options).as_deref(), Ok("false"));
    assert_eq!(Value::NULL.render(&options).as_deref(), Ok("null"));
}

#[test]
fn test_invalid_is_not_renderable() {
    assert_eq!(Value::invalid().render(&RenderOptions::default()), Err(JsonError::InvalidJson));
    assert_eq!(Value::invalid().raw_string(), None);
    assert_eq!(Value::invalid().to_string(), "unknown");
}

#[test]
fn test_manual_path_escapes_strings() {
    let doc = Value::parse(r#"["say \"hi\"", "back\\slash", null]"#);
    let options = RenderOptions::default().cast_null(true);
    assert_eq!(
        doc.render(&options).as_deref(),
        Ok(r#"["say \"hi\"","back\\slash",null]"#)
    );
}

#[test]
fn test_ascii_encoding_escapes() {
    let doc = Value::parse(r#"["café"]"#);
    let options = RenderOptions::compact().encoding(TextEncoding::Ascii);
    assert_eq!(doc.render(&options).as_deref(), Ok(r#"["caf\u00e9"]"#));
    assert_eq!(Value::parse(&doc.render(&options).unwrap_or_default()), doc);
}

#[test]
fn test_raw_data_quotes_scalars() {
    let options = RenderOptions::compact();
    assert_eq!(Value::from("s").raw_data(&options), Ok(b"\"s\"".to_vec()));
    assert_eq!(Value::invalid().raw_data(&options), Err(JsonError::InvalidJson));
}

#[test]
fn test_display_uses_pretty_rendering() {
    assert_eq!(Value::from(7).to_string(), "7");
    assert_eq!(Value::parse("[]").to_string(), "[]");
}
