//! Lexer for Go source
//!
//! Handles tokenization including:
//! - Keywords and identifiers (Unicode letters allowed, as in Go)
//! - Integer, floating-point, imaginary, rune and string literals (interpreted and raw)
//! - Operators and punctuation, with maximal munch driven by the operator registry
//! - Line and block comments
//! - Automatic semicolon insertion at line ends
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String/rune literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use enumgen_core::lang::operators;
use enumgen_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Semicolon insertion (simplified):
//
// [token] → '\n' → last token ends a statement? → emit ';'
//                                              ↘ otherwise skip
// ============================================================================

/// Lexer for Go source code.
///
/// Converts source text into a stream of tokens. Every newline that follows a token which can end a
/// statement becomes a `;` token, so the parser never has to look at line structure.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        // A file may end without a trailing newline.
        self.insert_semicolon(self.current_pos);

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        // Skip whitespace (but not newlines)
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '\n' => self.insert_semicolon(start),

            // Comments
            '/' if self.peek() == Some('/') => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }
            '/' if self.peek() == Some('*') => self.scan_block_comment(start),

            // Literals
            '"' => self.scan_string(start),
            '`' => self.scan_raw_string(start),
            '\'' => self.scan_rune(start),
            '0'..='9' => self.scan_number(start, c),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start, c),

            // Punctuation
            '.' => {
                if self.peek() == Some('.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    self.add_punct(PunctuationId::Ellipsis, start);
                } else {
                    self.add_punct(PunctuationId::Dot, start);
                }
            }
            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            ':' if self.peek() != Some('=') => self.add_punct(PunctuationId::Colon, start),
            '~' => self.add_punct(PunctuationId::Tilde, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            // Operators
            _ => self.scan_operator(start, c),
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    /// Emit an automatic `;` if the previous token can end a statement.
    fn insert_semicolon(&mut self, at: usize) {
        if self.tokens.last().is_some_and(|t| t.kind.ends_statement()) {
            self.tokens.push(Token::new(
                TokenKind::Punctuation(PunctuationId::Semicolon),
                Span::new(at, at),
            ));
        }
    }

    fn scan_block_comment(&mut self, start: usize) {
        self.advance(); // consume '*'
        let mut saw_newline = false;
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    break;
                }
                Some('\n') => saw_newline = true,
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::new(
                        "Comment not terminated".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
            }
        }
        // A block comment spanning lines acts like a newline.
        if saw_newline {
            self.insert_semicolon(start);
        }
    }

    fn scan_operator(&mut self, start: usize, c: char) {
        match operators::longest_prefix(&self.source[start..]) {
            Some((id, len)) => {
                // `c` is already consumed; operators are ASCII so the rest is `len - 1` chars.
                for _ in 1..len {
                    self.advance();
                }
                self.add_token(TokenKind::Operator(id), start);
            }
            None => {
                self.errors.push(CompileError::new(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::lang::keywords::KeywordId;
    use enumgen_core::lang::operators::OperatorId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn is_semi(kind: &TokenKind) -> bool {
        kind.is_punctuation(PunctuationId::Semicolon)
    }

    #[test]
    fn test_keywords_and_idents() {
        let tokens = kinds("const iota type MyEnum");
        assert!(tokens[0].is_keyword(KeywordId::Const));
        assert!(matches!(&tokens[1], TokenKind::Ident(s) if s == "iota"));
        assert!(tokens[2].is_keyword(KeywordId::Type));
        assert!(matches!(&tokens[3], TokenKind::Ident(s) if s == "MyEnum"));
    }

    #[test]
    fn test_semicolon_insertion_after_ident_and_literal() {
        let tokens = kinds("a\nb = 1\n");
        assert!(matches!(&tokens[0], TokenKind::Ident(s) if s == "a"));
        assert!(is_semi(&tokens[1]));
        assert!(matches!(&tokens[2], TokenKind::Ident(s) if s == "b"));
        assert!(tokens[3].is_operator(OperatorId::Assign));
        assert!(matches!(tokens[4], TokenKind::Int(1)));
        assert!(is_semi(&tokens[5]));
        assert!(matches!(tokens[6], TokenKind::Eof));
    }

    #[test]
    fn test_no_semicolon_after_open_paren_or_operator() {
        let tokens = kinds("const (\nA = 1 +\n2\n)\n");
        let semis = tokens.iter().filter(|k| is_semi(k)).count();
        // After `2` and after `)`.
        assert_eq!(semis, 2);
    }

    #[test]
    fn test_semicolon_at_eof_without_newline() {
        let tokens = kinds("package p");
        assert!(is_semi(&tokens[2]));
        assert!(matches!(tokens[3], TokenKind::Eof));
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = kinds("a // trailing\n/* block */ b");
        assert!(matches!(&tokens[0], TokenKind::Ident(s) if s == "a"));
        assert!(is_semi(&tokens[1]));
        assert!(matches!(&tokens[2], TokenKind::Ident(s) if s == "b"));
    }

    #[test]
    fn test_multiline_block_comment_inserts_semicolon() {
        let tokens = kinds("a /* one\ntwo */ b");
        assert!(is_semi(&tokens[1]));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let errs = lex("a /* never closed").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Comment not terminated"));
    }

    #[test]
    fn test_operators_maximal_munch() {
        let tokens = kinds("a &^= b << 2 := <- ... ~");
        assert!(tokens[1].is_operator(OperatorId::AndNotEq));
        assert!(tokens[3].is_operator(OperatorId::Shl));
        assert!(tokens[5].is_operator(OperatorId::Define));
        assert!(tokens[6].is_operator(OperatorId::Arrow));
        assert!(tokens[7].is_punctuation(PunctuationId::Ellipsis));
        assert!(tokens[8].is_punctuation(PunctuationId::Tilde));
    }

    #[test]
    fn test_unicode_identifier_accepted() {
        let tokens = kinds("π = 1");
        assert!(matches!(&tokens[0], TokenKind::Ident(s) if s == "π"));
    }

    #[test]
    fn test_unexpected_character() {
        let errs = lex("a @ b").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("Unexpected character '@'"));
    }
}
