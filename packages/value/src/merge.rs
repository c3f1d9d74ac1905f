//! Deep merge
//!
//! Objects merge key by key, arrays concatenate, and any other pair of the
//! same kind is replaced by the incoming value. A kind mismatch is an error
//! only at the top level; below it the incoming value silently wins.

use crate::error::{JsonError, JsonResult};
use crate::value::{Content, Value};

impl Value {
    /// Merge `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::WrongType`] when the two values differ in kind at
    /// the top level. `self` is left untouched in that case.
    pub fn merge(&mut self, other: &Value) -> JsonResult<()> {
        if self.kind() != other.kind() {
            return Err(JsonError::WrongType);
        }
        if merge_content(self.content_mut(), other.content()) {
            *self = other.clone();
        }
        Ok(())
    }

    /// Merged copy of `self` and `other`; neither input is modified.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::WrongType`] when the two values differ in kind at
    /// the top level.
    pub fn merged(&self, other: &Value) -> JsonResult<Value> {
        let mut base = self.clone();
        base.merge(other)?;
        Ok(base)
    }
}

/// Merge `incoming` into `base` in place. Returns `true` when `incoming`
/// replaces `base` wholesale, which the caller performs so the top level can
/// also take over the incoming error tag.
fn merge_content(base: &mut Content, incoming: &Content) -> bool {
    match (base, incoming) {
        (Content::Object(entries), Content::Object(other)) => {
            for (key, item) in other {
                match entries.get_mut(key.as_str()) {
                    Some(existing) => {
                        if merge_content(existing.content_mut(), item.content()) {
                            *existing = item.clone();
                        }
                    }
                    None => {
                        entries.insert(key.clone(), item.clone());
                    }
                }
            }
            false
        }
        (Content::Array(items), Content::Array(other)) => {
            items.extend(other.iter().cloned());
            false
        }
        _ => true,
    }
}
