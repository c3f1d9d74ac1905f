//! The JSON value model
//!
//! A [`Value`] pairs its [`Content`] with an optional [`JsonError`] tag. The
//! tag explains why a value is what it is (a `Null` produced by a missing key
//! carries [`JsonError::NotExist`]) and is independent of the content.
//!
//! Children stored inside `Array` and `Object` content never carry a tag; every
//! constructor strips nested tags.

mod accessors;
mod compare;
mod convert;
mod number;

use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

use crate::error::JsonError;

pub use number::Number;

/// Current variant and payload held by a [`Value`]
#[derive(Clone, Default)]
pub enum Content {
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
    #[default]
    Null,
    /// Construction failed: the host value had no JSON representation
    Invalid,
}

/// Kind of a [`Content`], `Unknown` for invalid content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Number,
    String,
    Bool,
    Array,
    Object,
    Null,
    Unknown,
}

impl Type {
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Type::Number => "number",
            Type::String => "string",
            Type::Bool => "bool",
            Type::Array => "array",
            Type::Object => "object",
            Type::Null => "null",
            Type::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Content {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Type {
        match self {
            Content::Bool(_) => Type::Bool,
            Content::Number(_) => Type::Number,
            Content::String(_) => Type::String,
            Content::Array(_) => Type::Array,
            Content::Object(_) => Type::Object,
            Content::Null => Type::Null,
            Content::Invalid => Type::Unknown,
        }
    }

    /// Clear nested tags; returns `false` if an `Invalid` child was found
    fn strip_tags(&mut self) -> bool {
        match self {
            Content::Array(items) => items.iter_mut().all(Value::strip_nested),
            Content::Object(entries) => entries.values_mut().all(Value::strip_nested),
            Content::Invalid => false,
            Content::Bool(_) | Content::Number(_) | Content::String(_) | Content::Null => true,
        }
    }
}

/// A JSON datum that can be navigated without type checks or panics
#[derive(Clone, Default)]
pub struct Value {
    content: Content,
    error: Option<JsonError>,
}

impl Value {
    /// Plain `null` with no error
    pub const NULL: Value = Value::tagged_null(None);

    /// Normalize any serializable host value.
    ///
    /// Never fails: a host value with no JSON representation yields
    /// `Invalid` content tagged [`JsonError::UnsupportedType`].
    #[must_use]
    pub fn new<T: Serialize + ?Sized>(host: &T) -> Self {
        match crate::normalize::to_content(host) {
            Ok(content) => Value { content, error: None },
            Err(err) => {
                tracing::debug!(error = %err, "host value normalized to invalid");
                Value::invalid()
            }
        }
    }

    /// Wrap content directly. Nested tags are cleared, and an `Invalid`
    /// anywhere in the tree makes the whole value invalid.
    #[must_use]
    pub fn from_content(mut content: Content) -> Self {
        if content.strip_tags() {
            Value { content, error: None }
        } else {
            Value::invalid()
        }
    }

    /// `Invalid` content tagged [`JsonError::UnsupportedType`]
    #[inline]
    #[must_use]
    pub fn invalid() -> Self {
        Value {
            content: Content::Invalid,
            error: Some(JsonError::UnsupportedType),
        }
    }

    #[inline]
    pub(crate) const fn tagged_null(error: Option<JsonError>) -> Self {
        Value {
            content: Content::Null,
            error,
        }
    }

    /// Already-normalized content; used by the normalizer and path writes
    #[inline]
    pub(crate) fn from_clean(content: Content) -> Self {
        Value { content, error: None }
    }

    fn strip_nested(value: &mut Value) -> bool {
        value.error = None;
        value.content.strip_tags()
    }

    /// Replace the content with a freshly normalized host value.
    ///
    /// The error is cleared, unless the host value is unsupported, in which
    /// case it becomes [`JsonError::UnsupportedType`].
    pub fn replace<T: Serialize + ?Sized>(&mut self, host: &T) {
        *self = Value::new(host);
    }

    /// Replace content and clear the error
    #[inline]
    pub(crate) fn set_content(&mut self, content: Content) {
        self.content = content;
        self.error = None;
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[inline]
    #[must_use]
    pub fn into_content(self) -> Content {
        self.content
    }

    #[inline]
    pub(crate) fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> Type {
        self.content.kind()
    }

    /// Why this value is what it is, if anything went wrong producing it
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<JsonError> {
        self.error
    }

    /// `false` when the value stands for something missing or invalid
    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        !self.error.is_some_and(JsonError::marks_missing)
    }

    /// Number of elements or entries; zero for scalars
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.content {
            Content::Array(items) => items.len(),
            Content::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Bool(b) => write!(f, "Bool({b})"),
            Content::Number(n) => write!(f, "{n:?}"),
            Content::String(s) => write!(f, "String({s:?})"),
            Content::Array(items) => f.debug_list().entries(items.iter()).finish(),
            Content::Object(entries) => f.debug_map().entries(entries.iter()).finish(),
            Content::Null => f.write_str("Null"),
            Content::Invalid => f.write_str("Invalid"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            None => self.content.fmt(f),
            Some(error) => f
                .debug_struct("Value")
                .field("content", &self.content)
                .field("error", &error)
                .finish(),
        }
    }
}
