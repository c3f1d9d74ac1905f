//! Read access: `get`, `get_path` and the `Index` impls

use std::ops::Index;

use super::Selector;
use crate::error::JsonError;
use crate::value::{Content, Value};

static TAGGED_NULLS: [Value; 6] = [
    Value::tagged_null(Some(JsonError::UnsupportedType)),
    Value::tagged_null(Some(JsonError::ElementTooDeep)),
    Value::tagged_null(Some(JsonError::WrongType)),
    Value::tagged_null(Some(JsonError::IndexOutOfBounds)),
    Value::tagged_null(Some(JsonError::NotExist)),
    Value::tagged_null(Some(JsonError::InvalidJson)),
];

/// Shared `Null` carrying `error`
fn null_with(error: JsonError) -> &'static Value {
    let slot = match error {
        JsonError::UnsupportedType => 0,
        JsonError::ElementTooDeep => 1,
        JsonError::WrongType => 2,
        JsonError::IndexOutOfBounds => 3,
        JsonError::NotExist => 4,
        JsonError::InvalidJson => 5,
    };
    &TAGGED_NULLS[slot]
}

impl Value {
    /// Receiver's own error if it has one, `WrongType` otherwise
    #[inline]
    fn not_a_container(&self) -> &'static Value {
        null_with(self.error().unwrap_or(JsonError::WrongType))
    }

    /// Element at `index`.
    ///
    /// Out of bounds yields `Null` tagged [`JsonError::IndexOutOfBounds`]; a
    /// non-array yields `Null` tagged with the receiver's error or
    /// [`JsonError::WrongType`].
    #[must_use]
    pub fn at(&self, index: usize) -> &Value {
        match self.content() {
            Content::Array(items) => items
                .get(index)
                .unwrap_or_else(|| null_with(JsonError::IndexOutOfBounds)),
            _ => self.not_a_container(),
        }
    }

    /// Entry under `key`.
    ///
    /// A missing key yields `Null` tagged [`JsonError::NotExist`]; a
    /// non-object yields `Null` tagged with the receiver's error or
    /// [`JsonError::WrongType`].
    #[must_use]
    pub fn key(&self, key: &str) -> &Value {
        match self.content() {
            Content::Object(entries) => entries
                .get(key)
                .unwrap_or_else(|| null_with(JsonError::NotExist)),
            _ => self.not_a_container(),
        }
    }

    /// One step of navigation
    #[inline]
    #[must_use]
    pub fn get(&self, selector: &Selector) -> &Value {
        match selector {
            Selector::Index(index) => self.at(*index),
            Selector::Key(key) => self.key(key),
        }
    }

    /// Left fold of [`Value::get`] over `path`; an empty path is the receiver
    #[must_use]
    pub fn get_path<'p, P>(&self, path: P) -> &Value
    where
        P: IntoIterator<Item = &'p Selector>,
    {
        path.into_iter().fold(self, Value::get)
    }

    /// Mutable access to an existing child, `None` when the step misses
    #[must_use]
    pub fn get_mut(&mut self, selector: &Selector) -> Option<&mut Value> {
        match (self.content_mut(), selector) {
            (Content::Array(items), Selector::Index(index)) => items.get_mut(*index),
            (Content::Object(entries), Selector::Key(key)) => entries.get_mut(key.as_str()),
            _ => None,
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, index: usize) -> &Value {
        self.at(index)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, key: &str) -> &Value {
        self.key(key)
    }
}

impl Index<&String> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, key: &String) -> &Value {
        self.key(key)
    }
}

impl Index<&Selector> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, selector: &Selector) -> &Value {
        self.get(selector)
    }
}

impl Index<&[Selector]> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, path: &[Selector]) -> &Value {
        self.get_path(path)
    }
}
