//! Default values for [`ReadOptions`](super::ReadOptions) and
//! [`RenderOptions`](super::RenderOptions)

use super::options::{ReadOptions, RenderOptions, TextEncoding};

/// Container levels admitted by rendering unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 10;

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            allow_fragments: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            pretty: true,
            cast_null: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
