//! Error taxonomy for the value model
//!
//! Subscripting and construction never fail outright: they hand back a
//! `Null` value tagged with one of the kinds below. Only merging and
//! rendering return a [`JsonResult`].

mod conversions;
mod types;

pub use types::{JsonError, JsonResult, ParseError, ERROR_DOMAIN};
