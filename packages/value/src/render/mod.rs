//! Rendering values to text
//!
//! Scalars render to their own text form; a top-level string renders as its
//! raw text without quotes. Containers either go through the raw encoder
//! (`serde_json`) or, with [`RenderOptions::cast_null`], through a manual
//! recursive writer. On both paths each container level consumes one unit of
//! [`RenderOptions::max_depth`]; entering a container with none left fails
//! with [`JsonError::ElementTooDeep`].

mod encoding;
mod manual;

use std::fmt;

use crate::config::{RenderOptions, TextEncoding};
use crate::error::{JsonError, JsonResult};
use crate::value::{Content, Value};

/// Fail when the container nesting of `content` exceeds `remaining` levels
fn check_depth(content: &Content, remaining: usize) -> JsonResult<()> {
    match content {
        Content::Array(items) => check_children(items.iter(), remaining),
        Content::Object(entries) => check_children(entries.values(), remaining),
        _ => Ok(()),
    }
}

fn check_children<'a>(mut children: impl Iterator<Item = &'a Value>, remaining: usize) -> JsonResult<()> {
    let below = remaining.checked_sub(1).ok_or(JsonError::ElementTooDeep)?;
    children.try_for_each(|child| check_depth(child.content(), below))
}

fn encode(value: &Value, pretty: bool) -> JsonResult<Vec<u8>> {
    let raw = value.to_raw().ok_or(JsonError::InvalidJson)?;
    let encoded = if pretty {
        serde_json::to_vec_pretty(&raw)
    } else {
        serde_json::to_vec(&raw)
    };
    encoded.map_err(|_| JsonError::InvalidJson)
}

impl Value {
    /// Render to text.
    ///
    /// # Errors
    ///
    /// - [`JsonError::ElementTooDeep`] when containers nest deeper than
    ///   `options.max_depth`
    /// - [`JsonError::InvalidJson`] when the value is `Invalid`, or when the
    ///   encoder path meets an `Invalid` child or a non-finite number
    pub fn render(&self, options: &RenderOptions) -> JsonResult<String> {
        let text = match self.content() {
            Content::Array(_) | Content::Object(_) if options.cast_null => {
                manual::render(self.content(), options.max_depth)?
            }
            Content::Array(_) | Content::Object(_) => {
                let bytes = self.raw_data(options)?;
                String::from_utf8(bytes).map_err(|_| JsonError::InvalidJson)?
            }
            Content::String(s) => s.clone(),
            Content::Number(n) => n.to_string(),
            Content::Bool(b) => b.to_string(),
            Content::Null => "null".to_owned(),
            Content::Invalid => return Err(JsonError::InvalidJson),
        };
        Ok(encoding::apply(text, options.encoding))
    }

    /// Encoder output for any content, strings quoted.
    ///
    /// # Errors
    ///
    /// [`JsonError::ElementTooDeep`] past `options.max_depth`, and
    /// [`JsonError::InvalidJson`] when the tree holds `Invalid` content or a
    /// non-finite number.
    pub fn raw_data(&self, options: &RenderOptions) -> JsonResult<Vec<u8>> {
        check_depth(self.content(), options.max_depth)?;
        let bytes = encode(self, options.pretty)?;
        Ok(match options.encoding {
            TextEncoding::Utf8 => bytes,
            TextEncoding::Ascii => {
                let text = String::from_utf8(bytes).map_err(|_| JsonError::InvalidJson)?;
                encoding::apply(text, options.encoding).into_bytes()
            }
        })
    }

    /// [`Value::render`] with default options, `None` on failure
    #[must_use]
    pub fn raw_string(&self) -> Option<String> {
        self.raw_string_with(&RenderOptions::default())
    }

    /// [`Value::render`] that logs and swallows failures
    #[must_use]
    pub fn raw_string_with(&self, options: &RenderOptions) -> Option<String> {
        match self.render(options) {
            Ok(text) => Some(text),
            Err(error) => {
                tracing::warn!(%error, code = error.code(), kind = %self.kind(), "could not render JSON value");
                None
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_string() {
            Some(text) => f.write_str(&text),
            None => f.write_str("unknown"),
        }
    }
}
