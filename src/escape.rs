//! Transforms for brace-quoted path segments.
//!
//! A segment written as `{...}` may contain characters the key grammar
//! forbids. The text between the braces is run through an [`Unescape`]
//! implementation before it is classified.

// used to append hex escapes without intermediate strings
use std::fmt::Write;

/// Decodes the inside of a brace-quoted segment.
///
/// The output is classified like plain segment text. Output that is itself
/// brace-quoted is never decoded again and is rejected as an invalid key.
pub trait Unescape: Send + Sync {
    fn decode(&self, text: &str) -> String;
}

/// Escapes text into a valid key.
///
/// Letters pass through, digits pass through unless they come first, and every
/// other byte becomes `_` followed by two lowercase hex digits. The empty
/// string becomes `_`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexEscape;

impl Unescape for HexEscape {
    fn decode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::from("_");
        }
        let mut escaped = String::with_capacity(text.len() * 3);
        for (i, byte) in text.bytes().enumerate() {
            if byte.is_ascii_alphabetic() || (i > 0 && byte.is_ascii_digit()) {
                escaped.push(byte as char);
            } else {
                // writing to a String cannot fail
                let _ = write!(escaped, "_{:02x}", byte);
            }
        }
        escaped
    }
}

/// Returns the inside of a `{...}` segment, if the segment is brace-quoted.
pub fn brace_quoted(raw: &str) -> Option<&str> {
    if raw.len() >= 2 {
        raw.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
    } else {
        None
    }
}
