//! Iteration as `(index-or-key, value)` pairs

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::value::{Content, Value};

/// Iterator over the children of a [`Value`]; empty for scalars
pub struct Iter<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Array(Enumerate<slice::Iter<'a, Value>>),
    Object(hashbrown::hash_map::Iter<'a, String, Value>),
    Empty,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Array(items) => items.next().map(|(index, item)| (index.to_string(), item)),
            Inner::Object(entries) => entries.next().map(|(key, item)| (key.clone(), item)),
            Inner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Array(items) => items.size_hint(),
            Inner::Object(entries) => entries.size_hint(),
            Inner::Empty => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Value {
    /// Children as `(stringified index or key, value)` pairs
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self.content() {
            Content::Array(items) => Inner::Array(items.iter().enumerate()),
            Content::Object(entries) => Inner::Object(entries.iter()),
            _ => Inner::Empty,
        };
        Iter { inner }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = (String, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
