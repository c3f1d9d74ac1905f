//! Core error types for value construction, navigation, merge and rendering.

/// Domain string reported alongside error codes
pub const ERROR_DOMAIN: &str = "safejson";

/// Closed set of failures a [`crate::Value`] can carry or an operation can return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum JsonError {
    /// Host value has no JSON-compatible representation
    #[error("unsupported type: the host value has no JSON representation")]
    UnsupportedType,
    /// Array index access beyond current length
    #[error("array index is out of bounds")]
    IndexOutOfBounds,
    /// Rendering recursion exceeded the configured depth limit
    #[error("element too deep: increase max_depth")]
    ElementTooDeep,
    /// Top-level type mismatch during merge, or a non-container was subscripted
    #[error("wrong type: values differ in type or receiver is not a container")]
    WrongType,
    /// Object key lookup failed
    #[error("object key does not exist")]
    NotExist,
    /// Top-level value is not encodable
    #[error("invalid JSON: value cannot be encoded")]
    InvalidJson,
}

impl JsonError {
    /// Every kind, in code order from highest to lowest
    pub const ALL: [JsonError; 6] = [
        JsonError::UnsupportedType,
        JsonError::ElementTooDeep,
        JsonError::WrongType,
        JsonError::IndexOutOfBounds,
        JsonError::NotExist,
        JsonError::InvalidJson,
    ];

    /// Stable numeric code for this kind
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            JsonError::UnsupportedType => 999,
            JsonError::ElementTooDeep => 902,
            JsonError::WrongType => 901,
            JsonError::IndexOutOfBounds => 900,
            JsonError::NotExist => 500,
            JsonError::InvalidJson => 490,
        }
    }

    /// Whether a value carrying this error counts as missing or invalid
    #[inline]
    #[must_use]
    pub const fn marks_missing(self) -> bool {
        matches!(self.code(), 400..=1000)
    }
}

/// Result type for fallible value operations
pub type JsonResult<T> = Result<T, JsonError>;

/// Failure reported by the strict parsing constructor
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input is not well-formed JSON
    #[error("JSON syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    /// Input ended before a complete document was read
    #[error("unexpected end of JSON input at line {line}, column {column}")]
    Eof { line: usize, column: usize },
    /// Top-level scalar rejected because fragments are disabled
    #[error("top-level {kind} rejected: fragments are not allowed")]
    Fragment { kind: &'static str },
    /// Any other parser failure
    #[error("JSON parse error: {0}")]
    Other(String),
}
