//! Everything needed to work with values, in one import

pub use crate::config::{ReadOptions, RenderOptions, TextEncoding};
pub use crate::error::{JsonError, JsonResult};
pub use crate::path;
pub use crate::path::Selector;
pub use crate::value::{Content, Number, Type, Value};
