//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters, separators and access markers.
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("..."), Some(PunctuationId::Ellipsis));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Access markers like `.`.
    Access,
    /// Misc markers like `...` and `~`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Semicolon,
    Colon,
    Dot,
    Ellipsis,
    Tilde,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::Tilde, "~", PunctuationCategory::Marker),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Full metadata.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return the matching closing delimiter for an opening one.
pub fn closing(id: PunctuationId) -> Option<PunctuationId> {
    match id {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
