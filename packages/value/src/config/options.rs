//! Option types consumed by the parser bridge and the renderer

/// Options forwarded to the raw parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Accept a bare scalar (`1`, `"x"`, `true`, `null`) as a whole document
    pub allow_fragments: bool,
}

impl ReadOptions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn allow_fragments(mut self, allow: bool) -> Self {
        self.allow_fragments = allow;
        self
    }
}

/// Character repertoire of rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Emit text as-is
    #[default]
    Utf8,
    /// Escape every non-ASCII character as `\uXXXX`
    Ascii,
}

/// Options controlling [`Value::render`](crate::Value::render)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output character repertoire
    pub encoding: TextEncoding,
    /// Indent encoder output; ignored by manual rendering
    pub pretty: bool,
    /// Render containers manually, writing `null` for nulls and unencodable children
    pub cast_null: bool,
    /// Container levels that may be entered before rendering fails
    pub max_depth: usize,
}

impl RenderOptions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact single-line encoder output
    #[inline]
    #[must_use]
    pub fn compact() -> Self {
        Self::default().pretty(false)
    }

    #[inline]
    #[must_use]
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[inline]
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[inline]
    #[must_use]
    pub fn cast_null(mut self, cast_null: bool) -> Self {
        self.cast_null = cast_null;
        self
    }

    #[inline]
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
