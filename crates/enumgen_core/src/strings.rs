//! Go string literal rendering.
//!
//! [`quote`] renders a string the way Go's `strconv.Quote` does, which is also how `go/constant` prints
//! string constants. The rendered form is both the sort key of string-backed enum values and the literal
//! written into generated `case` clauses, so it has to be stable and valid Go.
//!
//! ## Notes
//! - Printability is approximated: control characters and the common invisible format characters are
//!   escaped, everything else is written verbatim.

use std::fmt::Write;

/// Render `s` as a double-quoted Go string literal.
///
/// ## Examples
/// ```rust
/// use enumgen_core::strings::quote;
///
/// assert_eq!(quote("One"), "\"One\"");
/// assert_eq!(quote(""), "\"\"");
/// assert_eq!(quote("a\"b\n"), "\"a\\\"b\\n\"");
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if is_printable(c) => out.push(c),
            c if (c as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Return `true` if `s` looks like a rendered Go string literal (`"..."`).
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    !matches!(
        c,
        '\u{ad}' | '\u{200b}'..='\u{200f}' | '\u{2028}'..='\u{202e}' | '\u{2060}'..='\u{2064}' | '\u{feff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("Three"), "\"Three\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quote("\u{1}"), "\"\\x01\"");
        assert_eq!(quote("\u{7f}"), "\"\\x7f\"");
        assert_eq!(quote("\u{feff}"), "\"\\ufeff\"");
    }

    #[test]
    fn test_quote_keeps_printable_unicode() {
        assert_eq!(quote("héllo 世界"), "\"héllo 世界\"");
    }

    #[test]
    fn test_is_quoted() {
        assert!(is_quoted("\"\""));
        assert!(is_quoted("\"x\""));
        assert!(!is_quoted("0"));
        assert!(!is_quoted("\""));
    }
}
