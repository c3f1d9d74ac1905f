//! Manual recursive writer used when nulls are cast explicitly

use std::fmt::Write;

use crate::error::{JsonError, JsonResult};
use crate::value::Content;

/// Render a container; `remaining` container levels may be entered
pub(super) fn render(content: &Content, remaining: usize) -> JsonResult<String> {
    let mut out = String::new();
    write_content(&mut out, content, remaining)?;
    Ok(out)
}

fn write_content(out: &mut String, content: &Content, remaining: usize) -> JsonResult<()> {
    match content {
        Content::Array(items) => {
            let below = remaining.checked_sub(1).ok_or(JsonError::ElementTooDeep)?;
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_content(out, item.content(), below)?;
            }
            out.push(']');
        }
        Content::Object(entries) => {
            let below = remaining.checked_sub(1).ok_or(JsonError::ElementTooDeep)?;
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_content(out, item.content(), below)?;
            }
            out.push('}');
        }
        Content::String(s) => write_quoted(out, s),
        Content::Number(n) => {
            // Writing into a String cannot fail
            let _ = write!(out, "{n}");
        }
        Content::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Content::Null | Content::Invalid => out.push_str("null"),
    }
    Ok(())
}

/// Quote `text`, escaping only backslashes and double quotes
fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
}
