//! Normalization of arbitrary host values into [`Content`]
//!
//! Any `T: Serialize` is a host value. Classification follows serde's data
//! model: booleans arrive through their own call and are never numbers,
//! integers and floats become numbers, text becomes strings, sequences become
//! arrays, text-keyed maps and structs become objects, unit and `None` become
//! null. Bytes, non-text map keys and integers wider than 64 bits are
//! unsupported, and one unsupported element rejects the whole tree.
//!
//! A [`Value`](crate::Value) inside the host value serializes as its own
//! content, so nested values unwrap recursively with no depth limit.

mod serializer;

use serde::Serialize;

use crate::value::Content;

use serializer::Unsupported;

/// Unit-struct name under which invalid content serializes. Foreign
/// serializers see a plain unit; the normalizer rejects it.
pub(crate) const INVALID_TOKEN: &str = "$safejson::private::Invalid";

pub(crate) fn to_content<T: Serialize + ?Sized>(host: &T) -> Result<Content, Unsupported> {
    host.serialize(serializer::ContentSerializer)
}
