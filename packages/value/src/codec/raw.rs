//! Conversions to and from the raw parser's tree, and parsing entry points

use std::convert::Infallible;
use std::str::FromStr;

use crate::config::ReadOptions;
use crate::error::ParseError;
use crate::value::{Content, Number, Type, Value};

fn content_from_raw(raw: serde_json::Value) -> Content {
    match raw {
        serde_json::Value::Null => Content::Null,
        serde_json::Value::Bool(b) => Content::Bool(b),
        serde_json::Value::Number(n) => Content::Number(Number::from(&n)),
        serde_json::Value::String(s) => Content::String(s),
        serde_json::Value::Array(items) => Content::Array(
            items
                .into_iter()
                .map(|item| Value::from_clean(content_from_raw(item)))
                .collect(),
        ),
        serde_json::Value::Object(entries) => Content::Object(
            entries
                .into_iter()
                .map(|(key, item)| (key, Value::from_clean(content_from_raw(item))))
                .collect(),
        ),
    }
}

fn content_to_raw(content: &Content) -> Option<serde_json::Value> {
    Some(match content {
        Content::Bool(b) => serde_json::Value::Bool(*b),
        Content::Number(n) => serde_json::Value::Number(n.to_raw()?),
        Content::String(s) => serde_json::Value::String(s.clone()),
        Content::Array(items) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| content_to_raw(item.content()))
                .collect::<Option<_>>()?,
        ),
        Content::Object(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, item)| Some((key.clone(), content_to_raw(item.content())?)))
                .collect::<Option<_>>()?,
        ),
        Content::Null => serde_json::Value::Null,
        Content::Invalid => return None,
    })
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        Value::from_clean(content_from_raw(raw))
    }
}

impl From<&serde_json::Value> for Value {
    fn from(raw: &serde_json::Value) -> Self {
        Value::from(raw.clone())
    }
}

impl Value {
    /// Equivalent raw-parser tree; `None` if the content holds `Invalid` or a
    /// non-finite number anywhere
    #[must_use]
    pub fn to_raw(&self) -> Option<serde_json::Value> {
        content_to_raw(self.content())
    }

    /// Parse bytes, reporting parser failures
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the bytes are not a JSON document, or
    /// when the document is a bare scalar and fragments are disallowed.
    pub fn try_from_slice(bytes: &[u8], options: &ReadOptions) -> Result<Value, ParseError> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !options.allow_fragments && !matches!(value.kind(), Type::Array | Type::Object) {
            return Err(ParseError::Fragment {
                kind: value.kind().name(),
            });
        }
        Ok(value)
    }

    /// Parse bytes; any failure yields plain `Null`
    #[must_use]
    pub fn from_slice(bytes: &[u8], options: &ReadOptions) -> Value {
        match Value::try_from_slice(bytes, options) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, len = bytes.len(), "unparseable JSON collapsed to null");
                Value::NULL
            }
        }
    }

    /// Parse text with default options; any failure yields plain `Null`
    #[must_use]
    pub fn parse(text: &str) -> Value {
        Value::from_slice(text.as_bytes(), &ReadOptions::default())
    }
}

impl FromStr for Value {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Value::parse(text))
    }
}
