//! Output character repertoire

use std::fmt::Write;

use crate::config::TextEncoding;

/// Re-encode rendered text for `encoding`
pub(super) fn apply(text: String, encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Utf8 => text,
        TextEncoding::Ascii if text.is_ascii() => text,
        TextEncoding::Ascii => escape_non_ascii(&text),
    }
}

/// Replace every non-ASCII character with `\uXXXX` escapes, using a
/// surrogate pair above the basic multilingual plane
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut units = [0u16; 2];
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            // Writing into a String cannot fail
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}
