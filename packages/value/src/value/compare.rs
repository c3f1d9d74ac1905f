//! Equality and partial ordering
//!
//! Values are equal when their content is: numbers numerically, strings and
//! bools exactly, arrays element-wise in order, objects entry-wise, and
//! `Null == Null`. Invalid content equals nothing, itself included. Error
//! tags are ignored.
//!
//! Ordering exists between two numbers and between two strings. Otherwise
//! only equal bools, equal containers and two nulls are ordered (as equal);
//! every other pair is unordered, so `<`, `<=`, `>` and `>=` are all false.

use std::cmp::Ordering;

use super::{Content, Value};

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Bool(a), Content::Bool(b)) => a == b,
            (Content::Number(a), Content::Number(b)) => a == b,
            (Content::String(a), Content::String(b)) => a == b,
            (Content::Array(a), Content::Array(b)) => a == b,
            (Content::Object(a), Content::Object(b)) => a == b,
            (Content::Null, Content::Null) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Content {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Content::Number(a), Content::Number(b)) => a.partial_cmp(b),
            (Content::String(a), Content::String(b)) => Some(a.cmp(b)),
            (Content::Null, Content::Null) => Some(Ordering::Equal),
            (Content::Bool(_), Content::Bool(_))
            | (Content::Array(_), Content::Array(_))
            | (Content::Object(_), Content::Object(_)) => {
                (self == other).then_some(Ordering::Equal)
            }
            _ => None,
        }
    }
}

impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.content() == other.content()
    }
}

impl PartialOrd for Value {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.content().partial_cmp(other.content())
    }
}
