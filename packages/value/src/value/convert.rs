//! Literal construction; every conversion goes through normalization

use std::collections::{BTreeMap, HashMap as StdHashMap};

use hashbrown::HashMap;
use serde::Serialize;

use super::{Content, Number, Value};

macro_rules! from_host {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(host: $ty) -> Self {
                    Value::new(&host)
                }
            }
        )*
    };
}

from_host!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, Number, String, &str,
);

impl<T: Serialize> From<Vec<T>> for Value {
    fn from(host: Vec<T>) -> Self {
        Value::new(&host)
    }
}

impl<T: Serialize> From<&[T]> for Value {
    fn from(host: &[T]) -> Self {
        Value::new(host)
    }
}

impl<T: Serialize> From<Option<T>> for Value {
    fn from(host: Option<T>) -> Self {
        Value::new(&host)
    }
}

impl<T: Serialize> From<StdHashMap<String, T>> for Value {
    fn from(host: StdHashMap<String, T>) -> Self {
        Value::new(&host)
    }
}

impl<T: Serialize> From<BTreeMap<String, T>> for Value {
    fn from(host: BTreeMap<String, T>) -> Self {
        Value::new(&host)
    }
}

impl<T: Serialize> From<HashMap<String, T>> for Value {
    fn from(host: HashMap<String, T>) -> Self {
        host.into_iter()
            .map(|(key, item)| (key, Value::new(&item)))
            .collect()
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from_content(Content::Array(iter.into_iter().collect()))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::from_content(Content::Object(
            iter.into_iter().map(|(key, item)| (key.into(), item)).collect(),
        ))
    }
}
