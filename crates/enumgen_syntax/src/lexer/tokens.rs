//! Token types for the Go lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens, including automatically inserted semicolons
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use enumgen_core::lang::keywords::{self, KeywordId};
use enumgen_core::lang::operators::OperatorId;
use enumgen_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(u128),
    Float(f64),
    Imaginary(f64),
    Rune(char),
    String(String),

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Return `true` if a line break right after this token ends the statement.
    ///
    /// This is Go's automatic semicolon insertion rule.
    pub fn ends_statement(&self) -> bool {
        match self {
            TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Imaginary(_)
            | TokenKind::Rune(_)
            | TokenKind::String(_) => true,
            TokenKind::Keyword(id) => keywords::terminates_statement(*id),
            TokenKind::Operator(id) => matches!(id, OperatorId::Inc | OperatorId::Dec),
            TokenKind::Punctuation(id) => matches!(
                id,
                PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace
            ),
            TokenKind::Eof => false,
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
