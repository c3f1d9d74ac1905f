//! Subscripting by index or key, single-step and along paths
//!
//! Reads never fail: a missing step produces a `Null` tagged with the reason,
//! and every later step propagates that tag. Writes are best-effort: a write
//! whose target does not already exist, or whose value carries an error, is
//! silently dropped.

mod access;
mod iter;
mod write;

use std::fmt;

pub use iter::Iter;

/// One navigation step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Index(usize),
    Key(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(index) => write!(f, "[{index}]"),
            Selector::Key(key) => write!(f, "[{key:?}]"),
        }
    }
}

impl From<usize> for Selector {
    #[inline]
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl From<&str> for Selector {
    #[inline]
    fn from(key: &str) -> Self {
        Selector::Key(key.to_owned())
    }
}

impl From<String> for Selector {
    #[inline]
    fn from(key: String) -> Self {
        Selector::Key(key)
    }
}

impl From<&Selector> for Selector {
    #[inline]
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

/// Build a path from mixed indices and keys: `path!["users", 0, "name"]`
#[macro_export]
macro_rules! path {
    ($($step:expr),* $(,)?) => {
        vec![$($crate::Selector::from($step)),*]
    };
}
