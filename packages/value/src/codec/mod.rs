//! Bridges between [`Value`] and structured encoders/decoders
//!
//! `Serialize` writes the most specific native representation of the content
//! (integers stay integers) and an explicit null for `Null` and `Invalid`.
//! `Invalid` is written as a unit struct, which self-describing formats
//! encode as their plain null or unit; formats that print unit-struct names
//! will show the private marker name instead.
//! `Deserialize` accepts whatever a self-describing format offers and falls
//! back to `Null` for anything without a JSON shape.

mod de;
mod raw;

use serde::ser::{Serialize, Serializer};

use crate::normalize::INVALID_TOKEN;
use crate::value::{Content, Number, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.content() {
            Content::Bool(b) => serializer.serialize_bool(*b),
            Content::Number(n) => n.serialize_into(serializer),
            Content::String(s) => serializer.serialize_str(s),
            Content::Array(items) => serializer.collect_seq(items),
            Content::Object(entries) => serializer.collect_map(entries),
            Content::Null => serializer.serialize_unit(),
            Content::Invalid => serializer.serialize_unit_struct(INVALID_TOKEN),
        }
    }
}

impl Serialize for Number {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_into(serializer)
    }
}
