//! # SafeJSON value model
//!
//! A tolerant wrapper around a dynamically-typed JSON value. Navigate
//! arbitrarily shaped, possibly malformed data by key or index without type
//! checks and without panics: absence and type mismatches come back as a
//! `Null` value tagged with a [`JsonError`] instead of as a failure.
//!
//! ## Features
//!
//! - **Total normalization** from any `T: Serialize`
//! - **Error-carrying subscripts** via `Index`, [`Value::get_path`] and [`path!`]
//! - **Typed accessors** in optional and coercing forms
//! - **Deep merge** with a top-level kind check
//! - **Depth-bounded rendering** through `serde_json` or a manual writer
//! - **serde bridge** in both directions
//!
//! ## Usage
//!
//! ```rust
//! use safejson_value::{path, JsonError, Value};
//!
//! let json = Value::parse(r#"{"user": {"name": "Ada", "langs": ["en", "fr"]}}"#);
//! assert_eq!(json["user"]["name"].str(), Some("Ada"));
//! assert_eq!(json["user"]["langs"][5].error(), Some(JsonError::IndexOutOfBounds));
//! assert!(!json["user"]["age"].exists());
//! assert_eq!(json.get_path(&path!["user", "langs", 1]).string_value(), "fr");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

mod codec;
pub mod config;
pub mod error;
mod merge;
mod normalize;
pub mod path;
mod render;
pub mod value;

pub mod prelude;

pub use config::{ReadOptions, RenderOptions, TextEncoding};
pub use error::{JsonError, JsonResult, ParseError};
pub use hashbrown::HashMap;
pub use path::{Iter, Selector};
pub use value::{Content, Number, Type, Value};
