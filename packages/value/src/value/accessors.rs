//! Typed accessors
//!
//! Each kind has an optional accessor (`Some` only for matching content) and a
//! coercing `*_value` accessor that always produces something. Setters replace
//! the content and clear the error.

use hashbrown::HashMap;

use super::{Content, Number, Value};

/// Spellings accepted as `true` when coercing text to bool
const TRUTHY: [&str; 5] = ["true", "y", "t", "yes", "1"];

macro_rules! numeric_accessors {
    ($($get:ident, $coerce:ident, $set:ident => $ty:ty, $to:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($ty), "` when the content is a number or a bool")]
            #[inline]
            #[must_use]
            pub fn $get(&self) -> Option<$ty> {
                self.number().map(|n| n.$to())
            }

            #[doc = concat!("`", stringify!($ty), "` coerced from any content, zero when nothing fits")]
            #[inline]
            #[must_use]
            pub fn $coerce(&self) -> $ty {
                self.number_value().$to()
            }

            #[inline]
            pub fn $set(&mut self, value: $ty) {
                self.set_number(Number::from(value));
            }
        )*
    };
}

impl Value {
    #[inline]
    #[must_use]
    pub fn bool(&self) -> Option<bool> {
        match self.content() {
            Content::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numbers are true when nonzero; text is true when it spells one of
    /// `true`, `y`, `t`, `yes`, `1` in any case
    #[must_use]
    pub fn bool_value(&self) -> bool {
        match self.content() {
            Content::Bool(b) => *b,
            Content::Number(n) => n.to_bool(),
            Content::String(s) => TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(s)),
            _ => false,
        }
    }

    #[inline]
    pub fn set_bool(&mut self, value: bool) {
        self.set_content(Content::Bool(value));
    }

    #[inline]
    #[must_use]
    pub fn str(&self) -> Option<&str> {
        match self.content() {
            Content::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numbers render as canonical decimal text, bools as `true`/`false`
    #[must_use]
    pub fn string_value(&self) -> String {
        match self.content() {
            Content::String(s) => s.clone(),
            Content::Number(n) => n.to_string(),
            Content::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }

    #[inline]
    pub fn set_string(&mut self, value: impl Into<String>) {
        self.set_content(Content::String(value.into()));
    }

    /// The number, with `true`/`false` read as 1/0
    #[inline]
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        match self.content() {
            Content::Number(n) => Some(*n),
            Content::Bool(b) => Some(Number::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Text is parsed as a decimal; anything unparseable is zero
    #[must_use]
    pub fn number_value(&self) -> Number {
        match self.content() {
            Content::String(s) => Number::parse_decimal(s).unwrap_or(Number::ZERO),
            _ => self.number().unwrap_or(Number::ZERO),
        }
    }

    #[inline]
    pub fn set_number(&mut self, value: impl Into<Number>) {
        self.set_content(Content::Number(value.into()));
    }

    numeric_accessors! {
        f64, f64_value, set_f64 => f64, to_f64;
        f32, f32_value, set_f32 => f32, to_f32;
        i8, i8_value, set_i8 => i8, to_i8;
        i16, i16_value, set_i16 => i16, to_i16;
        i32, i32_value, set_i32 => i32, to_i32;
        i64, i64_value, set_i64 => i64, to_i64;
        isize, isize_value, set_isize => isize, to_isize;
        u8, u8_value, set_u8 => u8, to_u8;
        u16, u16_value, set_u16 => u16, to_u16;
        u32, u32_value, set_u32 => u32, to_u32;
        u64, u64_value, set_u64 => u64, to_u64;
        usize, usize_value, set_usize => usize, to_usize;
    }

    #[inline]
    #[must_use]
    pub fn null(&self) -> Option<()> {
        match self.content() {
            Content::Null => Some(()),
            _ => None,
        }
    }

    #[inline]
    pub fn set_null(&mut self) {
        self.set_content(Content::Null);
    }

    #[inline]
    #[must_use]
    pub fn array(&self) -> Option<&[Value]> {
        match self.content() {
            Content::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn array_value(&self) -> Vec<Value> {
        self.array().map(<[Value]>::to_vec).unwrap_or_default()
    }

    /// Store the items as an array; an invalid item invalidates the value
    pub fn set_array(&mut self, items: impl IntoIterator<Item = Value>) {
        *self = Value::from_content(Content::Array(items.into_iter().collect()));
    }

    #[inline]
    #[must_use]
    pub fn object(&self) -> Option<&HashMap<String, Value>> {
        match self.content() {
            Content::Object(entries) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub fn object_value(&self) -> HashMap<String, Value> {
        self.object().cloned().unwrap_or_default()
    }

    /// Store the entries as an object; an invalid entry invalidates the value
    pub fn set_object<K: Into<String>>(&mut self, entries: impl IntoIterator<Item = (K, Value)>) {
        *self = Value::from_content(Content::Object(
            entries
                .into_iter()
                .map(|(key, item)| (key.into(), item))
                .collect(),
        ));
    }
}
