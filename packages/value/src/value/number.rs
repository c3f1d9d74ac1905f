//! Numeric payload of a [`Value`](crate::Value)
//!
//! Integers keep their exact 64-bit representation; everything else is an
//! `f64`. Comparison is numeric across representations, so `1 == 1.0`.

use std::cmp::Ordering;
use std::fmt;

/// A JSON number
#[derive(Clone, Copy)]
pub struct Number {
    n: N,
}

#[derive(Clone, Copy)]
enum N {
    /// Always non-negative
    PosInt(u64),
    /// Always negative
    NegInt(i64),
    Float(f64),
}

macro_rules! lossy_to {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Convert to `", stringify!($ty), "`, wrapping integers and saturating floats")]
            #[inline]
            #[must_use]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
            pub fn $name(&self) -> $ty {
                match self.n {
                    N::PosInt(u) => u as $ty,
                    N::NegInt(i) => i as $ty,
                    N::Float(f) => f as $ty,
                }
            }
        )*
    };
}

impl Number {
    /// The number zero
    pub const ZERO: Number = Number { n: N::PosInt(0) };

    #[inline]
    #[must_use]
    pub fn from_i64(i: i64) -> Self {
        match u64::try_from(i) {
            Ok(u) => Number { n: N::PosInt(u) },
            Err(_) => Number { n: N::NegInt(i) },
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_u64(u: u64) -> Self {
        Number { n: N::PosInt(u) }
    }

    /// Floats stay floats even when integral, non-finite values included
    #[inline]
    #[must_use]
    pub const fn from_f64(f: f64) -> Self {
        Number { n: N::Float(f) }
    }

    #[inline]
    #[must_use]
    pub fn is_integer(&self) -> bool {
        !matches!(self.n, N::Float(_))
    }

    #[inline]
    #[must_use]
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self.n {
            N::Float(f) => f.is_finite(),
            N::PosInt(_) | N::NegInt(_) => true,
        }
    }

    /// Exact `i64` when the number is an integer in range
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(u) => i64::try_from(u).ok(),
            N::NegInt(i) => Some(i),
            N::Float(_) => None,
        }
    }

    /// Exact `u64` when the number is a non-negative integer
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(u) => Some(u),
            N::NegInt(_) | N::Float(_) => None,
        }
    }

    lossy_to! {
        to_i8 => i8,
        to_i16 => i16,
        to_i32 => i32,
        to_i64 => i64,
        to_isize => isize,
        to_u8 => u8,
        to_u16 => u16,
        to_u32 => u32,
        to_u64 => u64,
        to_usize => usize,
        to_f32 => f32,
        to_f64 => f64,
    }

    /// Nonzero test; `NaN` counts as nonzero
    #[inline]
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self.n {
            N::PosInt(u) => u != 0,
            N::NegInt(_) => true,
            N::Float(f) => f != 0.0,
        }
    }

    /// Parse decimal text. Surrounding whitespace is ignored; non-finite
    /// spellings such as `inf` or `NaN` are rejected.
    #[must_use]
    pub fn parse_decimal(text: &str) -> Option<Number> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(u) = text.parse::<u64>() {
            return Some(Number::from_u64(u));
        }
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::from_i64(i));
        }
        // f64 parsing accepts "inf" and "nan"; decimal text never spells those
        if text.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
            return None;
        }
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Number::from_f64)
    }

    /// Equivalent raw-parser number, `None` for non-finite floats
    #[must_use]
    pub fn to_raw(&self) -> Option<serde_json::Number> {
        match self.n {
            N::PosInt(u) => Some(serde_json::Number::from(u)),
            N::NegInt(i) => Some(serde_json::Number::from(i)),
            N::Float(f) => serde_json::Number::from_f64(f),
        }
    }

    pub(crate) fn serialize_into<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.n {
            N::PosInt(u) => serializer.serialize_u64(u),
            N::NegInt(i) => serializer.serialize_i64(i),
            N::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(raw: &serde_json::Number) -> Self {
        if let Some(u) = raw.as_u64() {
            Number::from_u64(u)
        } else if let Some(i) = raw.as_i64() {
            Number::from_i64(i)
        } else {
            Number::from_f64(raw.as_f64().unwrap_or(f64::NAN))
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(i: $ty) -> Self {
                    Number::from_i64(i64::from(i))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(u: $ty) -> Self {
                    Number::from_u64(u64::from(u))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Number {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(i: isize) -> Self {
        Number::from_i64(i as i64)
    }
}

impl From<usize> for Number {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from(u: usize) -> Self {
        Number::from_u64(u as u64)
    }
}

impl From<f32> for Number {
    #[inline]
    fn from(f: f32) -> Self {
        Number::from_f64(f64::from(f))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(f: f64) -> Self {
        Number::from_f64(f)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.n, other.n) {
            (N::PosInt(a), N::PosInt(b)) => Some(a.cmp(&b)),
            (N::NegInt(a), N::NegInt(b)) => Some(a.cmp(&b)),
            (N::NegInt(_), N::PosInt(_)) => Some(Ordering::Less),
            (N::PosInt(_), N::NegInt(_)) => Some(Ordering::Greater),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PosInt(u) => write!(f, "{u}"),
            N::NegInt(i) => write!(f, "{i}"),
            N::Float(x) => write!(f, "{x}"),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}
