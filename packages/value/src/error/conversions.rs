//! Conversions from the raw parser's errors into [`ParseError`]

use serde_json::error::Category;

use super::types::ParseError;

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        let line = error.line();
        let column = error.column();
        match error.classify() {
            Category::Eof => ParseError::Eof { line, column },
            Category::Syntax => ParseError::Syntax {
                message: error.to_string(),
                line,
                column,
            },
            Category::Io | Category::Data => ParseError::Other(error.to_string()),
        }
    }
}
