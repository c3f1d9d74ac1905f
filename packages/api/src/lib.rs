//! SafeJSON Public API
//!
//! Navigate arbitrarily shaped JSON by key or index without manual type
//! checks and without panics. Missing keys, out-of-range indices and type
//! mismatches come back as `Null` values tagged with a [`JsonError`].
//!
//! ```rust
//! use safejson::{json, JsonError};
//!
//! let doc = json!({"items": [{"id": 1}, {"id": 2}]});
//! assert_eq!(doc["items"][1]["id"].i64(), Some(2));
//! assert_eq!(doc["items"][7]["id"].error(), Some(JsonError::IndexOutOfBounds));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use serde::Serialize;

// Re-export the value model
pub use safejson_value::{
    path, Content, HashMap, Iter, JsonError, JsonResult, Number, ParseError, ReadOptions,
    RenderOptions, Selector, TextEncoding, Type, Value,
};
pub use safejson_value::{config, error, prelude};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Build a [`Value`] from JSON literal syntax.
///
/// The literal is built by the raw encoder's own macro and then normalized,
/// so `json!(...)` and `Value::new(&...)` agree exactly.
#[macro_export]
macro_rules! json {
    ($($literal:tt)+) => {
        $crate::Value::new(&$crate::__private::serde_json::json!($($literal)+))
    };
}

/// Parse JSON text; malformed input yields `Null`
#[must_use]
pub fn parse(text: &str) -> Value {
    Value::parse(text)
}

/// Parse JSON bytes with default options; malformed input yields `Null`
#[must_use]
pub fn from_slice(bytes: &[u8]) -> Value {
    Value::from_slice(bytes, &ReadOptions::default())
}

/// Normalize any serializable host value
#[must_use]
pub fn from_host<T: Serialize + ?Sized>(host: &T) -> Value {
    Value::new(host)
}

/// Decode a value into a typed host structure
///
/// # Errors
///
/// Returns [`ParseError`] when the value holds content with no JSON form or
/// does not match the shape of `T`.
pub fn to_host<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, ParseError> {
    let raw = value
        .to_raw()
        .ok_or_else(|| ParseError::Other(JsonError::InvalidJson.to_string()))?;
    serde_json::from_value(raw).map_err(ParseError::from)
}
