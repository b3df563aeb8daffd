//! Define the reserved keyword vocabulary of Go.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; Go has no keyword aliases.
//! - Predeclared identifiers (`iota`, `true`, `string`, `len`, ...) are *not* keywords and lex as identifiers.
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::from_str("iota"), None);
//! assert_eq!(keywords::as_str(KeywordId::Type), "type");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Const,
    Var,
    Type,
    Func,
    Package,
    Import,

    // Composite types
    Struct,
    Interface,
    Map,
    Chan,

    // Control flow
    If,
    Else,
    For,
    Range,
    Switch,
    Case,
    Default,
    Select,
    Break,
    Continue,
    Fallthrough,
    Goto,
    Return,
    Defer,
    Go,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    CompositeType,
    ControlFlow,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Whether a line ending right after this keyword gets an automatic semicolon.
    pub terminates_statement: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Type, "type", KeywordCategory::Declaration),
    info(KeywordId::Func, "func", KeywordCategory::Declaration),
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    // Composite types
    info(KeywordId::Struct, "struct", KeywordCategory::CompositeType),
    info(KeywordId::Interface, "interface", KeywordCategory::CompositeType),
    info(KeywordId::Map, "map", KeywordCategory::CompositeType),
    info(KeywordId::Chan, "chan", KeywordCategory::CompositeType),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Range, "range", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Select, "select", KeywordCategory::ControlFlow),
    terminator(KeywordId::Break, "break"),
    terminator(KeywordId::Continue, "continue"),
    terminator(KeywordId::Fallthrough, "fallthrough"),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    terminator(KeywordId::Return, "return"),
    info(KeywordId::Defer, "defer", KeywordCategory::ControlFlow),
    info(KeywordId::Go, "go", KeywordCategory::ControlFlow),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if a newline after this keyword inserts a semicolon.
pub fn terminates_statement(id: KeywordId) -> bool {
    info_for(id).terminates_statement
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        terminates_statement: false,
    }
}

const fn terminator(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::ControlFlow,
        terminates_statement: true,
    }
}
