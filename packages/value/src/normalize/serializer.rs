//! `serde::Serializer` that builds [`Content`] trees

use std::fmt::Display;

use hashbrown::HashMap;
use serde::ser::{self, Impossible, Serialize};

use super::INVALID_TOKEN;
use crate::value::{Content, Number, Value};

/// Host value (or part of one) with no JSON representation
#[derive(Debug, thiserror::Error)]
#[error("unsupported host value: {0}")]
pub(crate) struct Unsupported(String);

impl ser::Error for Unsupported {
    fn custom<T: Display>(msg: T) -> Self {
        Unsupported(msg.to_string())
    }
}

fn child<T: Serialize + ?Sized>(value: &T) -> Result<Value, Unsupported> {
    value.serialize(ContentSerializer).map(Value::from_clean)
}

fn single_entry(key: &str, value: Value) -> Content {
    let mut entries = HashMap::with_capacity(1);
    entries.insert(key.to_owned(), value);
    Content::Object(entries)
}

pub(crate) struct ContentSerializer;

impl ser::Serializer for ContentSerializer {
    type Ok = Content;
    type Error = Unsupported;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeTaggedArray;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeTaggedObject;

    fn serialize_bool(self, v: bool) -> Result<Content, Unsupported> {
        Ok(Content::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Content, Unsupported> {
        if let Ok(i) = i64::try_from(v) {
            Ok(Content::Number(i.into()))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(Content::Number(u.into()))
        } else {
            Err(Unsupported(format!("integer {v} does not fit in 64 bits")))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Content, Unsupported> {
        u64::try_from(v)
            .map(|u| Content::Number(u.into()))
            .map_err(|_| Unsupported(format!("integer {v} does not fit in 64 bits")))
    }

    fn serialize_f32(self, v: f32) -> Result<Content, Unsupported> {
        Ok(Content::Number(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Content, Unsupported> {
        Ok(Content::Number(Number::from_f64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Content, Unsupported> {
        Ok(Content::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Content, Unsupported> {
        Ok(Content::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Content, Unsupported> {
        Err(Unsupported(format!("{} raw bytes", v.len())))
    }

    fn serialize_none(self) -> Result<Content, Unsupported> {
        Ok(Content::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Content, Unsupported> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Content, Unsupported> {
        Ok(Content::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Content, Unsupported> {
        if name == INVALID_TOKEN {
            return Err(Unsupported("invalid value".to_owned()));
        }
        Ok(Content::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Content, Unsupported> {
        Ok(Content::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Content, Unsupported> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Content, Unsupported> {
        Ok(single_entry(variant, child(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray, Unsupported> {
        Ok(SerializeArray {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray, Unsupported> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeArray, Unsupported> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTaggedArray, Unsupported> {
        Ok(SerializeTaggedArray {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeObject, Unsupported> {
        Ok(SerializeObject {
            entries: HashMap::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeObject, Unsupported> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTaggedObject, Unsupported> {
        Ok(SerializeTaggedObject {
            variant,
            entries: HashMap::with_capacity(len),
        })
    }
}

pub(crate) struct SerializeArray {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unsupported> {
        self.items.push(child(value)?);
        Ok(())
    }

    fn end(self) -> Result<Content, Unsupported> {
        Ok(Content::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unsupported> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Content, Unsupported> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unsupported> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Content, Unsupported> {
        ser::SerializeSeq::end(self)
    }
}

pub(crate) struct SerializeTaggedArray {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTaggedArray {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unsupported> {
        self.items.push(child(value)?);
        Ok(())
    }

    fn end(self) -> Result<Content, Unsupported> {
        let payload = Value::from_clean(Content::Array(self.items));
        Ok(single_entry(self.variant, payload))
    }
}

pub(crate) struct SerializeObject {
    entries: HashMap<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Unsupported> {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Unsupported> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Unsupported("map value without a key".to_owned()))?;
        self.entries.insert(key, child(value)?);
        Ok(())
    }

    fn end(self) -> Result<Content, Unsupported> {
        Ok(Content::Object(self.entries))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Unsupported> {
        self.entries.insert(key.to_owned(), child(value)?);
        Ok(())
    }

    fn end(self) -> Result<Content, Unsupported> {
        Ok(Content::Object(self.entries))
    }
}

pub(crate) struct SerializeTaggedObject {
    variant: &'static str,
    entries: HashMap<String, Value>,
}

impl ser::SerializeStructVariant for SerializeTaggedObject {
    type Ok = Content;
    type Error = Unsupported;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Unsupported> {
        self.entries.insert(key.to_owned(), child(value)?);
        Ok(())
    }

    fn end(self) -> Result<Content, Unsupported> {
        let payload = Value::from_clean(Content::Object(self.entries));
        Ok(single_entry(self.variant, payload))
    }
}

/// Accepts only text-like map keys
struct KeySerializer;

fn non_text_key(kind: &str) -> Unsupported {
    Unsupported(format!("object keys must be text, found {kind}"))
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Unsupported;

    type SerializeSeq = Impossible<String, Unsupported>;
    type SerializeTuple = Impossible<String, Unsupported>;
    type SerializeTupleStruct = Impossible<String, Unsupported>;
    type SerializeTupleVariant = Impossible<String, Unsupported>;
    type SerializeMap = Impossible<String, Unsupported>;
    type SerializeStruct = Impossible<String, Unsupported>;
    type SerializeStructVariant = Impossible<String, Unsupported>;

    fn serialize_str(self, v: &str) -> Result<String, Unsupported> {
        Ok(v.to_owned())
    }

    fn serialize_char(self, v: char) -> Result<String, Unsupported> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, Unsupported> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, Unsupported> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String, Unsupported> {
        Err(non_text_key("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String, Unsupported> {
        Err(non_text_key("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String, Unsupported> {
        Err(non_text_key("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, Unsupported> {
        Err(non_text_key("float"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, Unsupported> {
        Err(non_text_key("bytes"))
    }

    fn serialize_none(self) -> Result<String, Unsupported> {
        Err(non_text_key("none"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<String, Unsupported> {
        Err(non_text_key("option"))
    }

    fn serialize_unit(self) -> Result<String, Unsupported> {
        Err(non_text_key("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, Unsupported> {
        Err(non_text_key("unit struct"))
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, Unsupported> {
        Err(non_text_key("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Unsupported> {
        Err(non_text_key("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Unsupported> {
        Err(non_text_key("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Unsupported> {
        Err(non_text_key("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Unsupported> {
        Err(non_text_key("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Unsupported> {
        Err(non_text_key("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Unsupported> {
        Err(non_text_key("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Unsupported> {
        Err(non_text_key("enum variant"))
    }
}
