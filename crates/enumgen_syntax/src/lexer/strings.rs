//! String and rune literal scanning.
//!
//! Interpreted strings (`"..."`) decode Go escape sequences. Byte escapes (`\x41`, `\101`) can build
//! multi-byte sequences, so the decoded bytes are collected first and checked for UTF-8 at the end.
//! Raw strings (`` `...` ``) are taken verbatim except that carriage returns are dropped.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

/// One decoded escape sequence.
enum Escaped {
    /// `\x..` and octal escapes: a single raw byte.
    Byte(u8),
    /// Everything else: a Unicode code point.
    Char(char),
}

impl<'a> Lexer<'a> {
    /// Scan an interpreted string literal. The opening `"` was already consumed.
    pub(super) fn scan_string(&mut self, start: usize) {
        let mut bytes: Vec<u8> = Vec::new();
        let mut ok = true;

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.literal_error("String literal not terminated", start);
                    return;
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape(start, '"') {
                        Some(Escaped::Byte(b)) => bytes.push(b),
                        Some(Escaped::Char(c)) => {
                            let mut buf = [0u8; 4];
                            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                        None => ok = false,
                    }
                }
                Some(c) => {
                    self.advance();
                    let mut buf = [0u8; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }

        if !ok {
            return;
        }
        match String::from_utf8(bytes) {
            Ok(value) => self.add_token(TokenKind::String(value), start),
            Err(_) => self.literal_error("String literal is not valid UTF-8", start),
        }
    }

    /// Scan a raw string literal. The opening backquote was already consumed.
    pub(super) fn scan_raw_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('`') => break,
                Some('\r') => {}
                Some(c) => value.push(c),
                None => {
                    self.literal_error("Raw string literal not terminated", start);
                    return;
                }
            }
        }
        self.add_token(TokenKind::String(value), start);
    }

    /// Scan a rune literal. The opening `'` was already consumed.
    pub(super) fn scan_rune(&mut self, start: usize) {
        let value = match self.peek() {
            None | Some('\n') | Some('\'') => {
                if self.peek() == Some('\'') {
                    self.advance();
                    self.literal_error("Empty rune literal", start);
                } else {
                    self.literal_error("Rune literal not terminated", start);
                }
                return;
            }
            Some('\\') => {
                self.advance();
                match self.scan_escape(start, '\'') {
                    Some(Escaped::Byte(b)) => char::from(b),
                    Some(Escaped::Char(c)) => c,
                    None => return,
                }
            }
            Some(c) => {
                self.advance();
                c
            }
        };

        if !self.match_char('\'') {
            self.literal_error("Rune literal must contain exactly one character", start);
            // Recover at the closing quote on this line, if any.
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
                if c == '\'' {
                    break;
                }
            }
            return;
        }
        self.add_token(TokenKind::Rune(value), start);
    }

    /// Decode one escape sequence after its backslash.
    ///
    /// `quote` is the delimiter of the enclosing literal; only that quote may be escaped.
    fn scan_escape(&mut self, start: usize, quote: char) -> Option<Escaped> {
        let Some(c) = self.advance() else {
            self.literal_error("Escape sequence not terminated", start);
            return None;
        };
        let simple = match c {
            'a' => Some('\u{7}'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\u{b}'),
            '\\' => Some('\\'),
            _ if c == quote => Some(quote),
            _ => None,
        };
        if let Some(ch) = simple {
            return Some(Escaped::Char(ch));
        }

        match c {
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            self.advance();
                            value = value * 8 + d;
                        }
                        None => {
                            self.literal_error("Octal escape needs exactly three digits", start);
                            return None;
                        }
                    }
                }
                match u8::try_from(value) {
                    Ok(b) => Some(Escaped::Byte(b)),
                    Err(_) => {
                        self.literal_error("Octal escape value is greater than 255", start);
                        None
                    }
                }
            }
            'x' => self.scan_hex_escape(start, 2).map(|v| Escaped::Byte(v as u8)),
            'u' | 'U' => {
                let len = if c == 'u' { 4 } else { 8 };
                let value = self.scan_hex_escape(start, len)?;
                match char::from_u32(value) {
                    Some(ch) => Some(Escaped::Char(ch)),
                    None => {
                        self.literal_error("Escape sequence is an invalid Unicode code point", start);
                        None
                    }
                }
            }
            _ => {
                self.literal_error(&format!("Unknown escape sequence '\\{}'", c), start);
                None
            }
        }
    }

    fn scan_hex_escape(&mut self, start: usize, len: usize) -> Option<u32> {
        let mut value: u32 = 0;
        for _ in 0..len {
            match self.peek().and_then(|d| d.to_digit(16)) {
                Some(d) => {
                    self.advance();
                    value = value * 16 + d;
                }
                None => {
                    self.literal_error(&format!("Escape sequence needs exactly {} hex digits", len), start);
                    return None;
                }
            }
        }
        Some(value)
    }

    fn literal_error(&mut self, message: &str, start: usize) {
        self.errors.push(CompileError::new(
            message.to_string(),
            Span::new(start, self.current_pos),
        ));
    }
}
