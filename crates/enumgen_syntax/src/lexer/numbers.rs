//! Numeric literal scanning.
//!
//! Go integer literals come in four bases (`42`, `0x2A`, `0o52`/`052`, `0b101010`) and may use `_` as a
//! digit separator. Decimal literals may continue into a float (`1.5`, `1e3`, `.5`) and any number may
//! carry an `i` suffix to become imaginary.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first character (`first`) was already consumed.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0' {
            let radix = match self.peek() {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.advance();
                self.scan_prefixed_int(start, radix);
                return;
            }
        }

        let mut text = String::new();
        let mut is_float = first == '.';
        if is_float {
            text.push('0');
        }
        text.push(first);
        self.consume_digits(&mut text, 10);

        if !is_float && self.peek() == Some('.') {
            is_float = true;
            self.advance();
            text.push('.');
            self.consume_digits(&mut text, 10);
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.advance();
            text.push('e');
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.advance();
                text.push(sign);
            }
            let before = text.len();
            self.consume_digits(&mut text, 10);
            if text.len() == before {
                self.number_error("Exponent has no digits", start);
                return;
            }
        }

        if self.match_char('i') {
            match text.parse::<f64>() {
                Ok(v) => self.add_token(TokenKind::Imaginary(v), start),
                Err(_) => self.number_error("Invalid imaginary literal", start),
            }
            return;
        }

        if is_float {
            match text.parse::<f64>() {
                Ok(v) => self.add_token(TokenKind::Float(v), start),
                Err(_) => self.number_error("Invalid floating-point literal", start),
            }
            return;
        }

        // A leading zero without a prefix is a legacy octal literal.
        let (digits, radix) = if text.len() > 1 && text.starts_with('0') {
            (&text[1..], 8)
        } else {
            (text.as_str(), 10)
        };
        match u128::from_str_radix(digits, radix) {
            Ok(v) => self.add_token(TokenKind::Int(v), start),
            Err(_) if radix == 8 => self.number_error("Invalid digit in octal literal", start),
            Err(_) => self.number_error("Integer literal out of range", start),
        }
    }

    /// Scan the digits of a `0x`/`0o`/`0b` literal. The prefix is already consumed.
    fn scan_prefixed_int(&mut self, start: usize, radix: u32) {
        let mut digits = String::new();
        self.consume_digits(&mut digits, radix);

        if radix == 16 && matches!(self.peek(), Some('.' | 'p' | 'P')) {
            self.number_error("Hexadecimal floating-point literals are not supported", start);
            return;
        }
        if self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
            self.number_error(&format!("Invalid digit in base-{} literal", radix), start);
            return;
        }
        if digits.is_empty() {
            self.number_error(&format!("Base-{} literal has no digits", radix), start);
            return;
        }

        match u128::from_str_radix(&digits, radix) {
            Ok(v) => {
                if self.match_char('i') {
                    self.add_token(TokenKind::Imaginary(v as f64), start);
                } else {
                    self.add_token(TokenKind::Int(v), start);
                }
            }
            Err(_) => self.number_error("Integer literal out of range", start),
        }
    }

    /// Append digits valid in `radix` to `out`, skipping `_` separators.
    fn consume_digits(&mut self, out: &mut String, radix: u32) {
        while let Some(c) = self.peek() {
            if c == '_' {
                self.advance();
            } else if c.is_digit(radix) {
                self.advance();
                out.push(c);
            } else {
                break;
            }
        }
    }

    fn number_error(&mut self, message: &str, start: usize) {
        self.errors.push(CompileError::new(
            message.to_string(),
            Span::new(start, self.current_pos),
        ));
    }
}
