//! Best-effort writes
//!
//! A write only ever replaces something that is already there. It is dropped
//! when the receiver is the wrong kind of container, the index is out of
//! bounds, the key is absent, or the assigned value carries an error. Growing
//! a container is explicit through [`Value::push`] and [`Value::insert`].

use super::Selector;
use crate::value::{Content, Value};

impl Value {
    /// Replace the child at `selector`; returns whether the write landed
    pub fn set(&mut self, selector: &Selector, value: Value) -> bool {
        if let Some(error) = value.error() {
            tracing::debug!(%selector, %error, "dropped write of an errored value");
            return false;
        }
        match self.get_mut(selector) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                tracing::debug!(%selector, kind = %self.kind(), "dropped write to a missing child");
                false
            }
        }
    }

    /// Replace the value at the end of `path`; returns whether the write
    /// landed. Every step must already exist; nothing is created on the way.
    pub fn set_path(&mut self, path: &[Selector], value: Value) -> bool {
        match path {
            [] => false,
            [step] => self.set(step, value),
            [first, rest @ ..] => match self.get_mut(first) {
                Some(child) => child.set_path(rest, value),
                None => {
                    tracing::debug!(step = %first, "dropped path write at a missing step");
                    false
                }
            },
        }
    }

    /// Append to an array; returns whether the value was appended
    pub fn push(&mut self, value: Value) -> bool {
        if value.error().is_some() {
            return false;
        }
        match self.content_mut() {
            Content::Array(items) => {
                items.push(value);
                true
            }
            _ => false,
        }
    }

    /// Insert or replace an object entry; returns whether the entry was stored
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        if value.error().is_some() {
            return false;
        }
        match self.content_mut() {
            Content::Object(entries) => {
                entries.insert(key.into(), value);
                true
            }
            _ => false,
        }
    }
}
