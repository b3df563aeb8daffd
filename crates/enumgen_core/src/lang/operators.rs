//! Operator vocabulary.
//!
//! Every Go operator token, its spelling, and binary precedence where it has one. The lexer uses the
//! spellings for maximal munch; the parser uses [`binary_precedence`] for its precedence climb.
//!
//! ## Notes
//! - Assignment operators (`=`, `:=`, `+=`, ...) have no precedence; they only appear inside function bodies
//!   and `var` initializers, which the parser skips.
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&^"), Some(OperatorId::AndNot));
//! assert_eq!(operators::binary_precedence(OperatorId::Shl), Some(5));
//! assert_eq!(operators::binary_precedence(OperatorId::Assign), None);
//! ```

/// Stable identifier for operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    AndNot,

    // Logical / comparison
    AndAnd,
    OrOr,
    Not,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment and statements
    Assign,
    Define,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    AndNotEq,
    Inc,
    Dec,
    Arrow,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Binary precedence (5 binds tightest), following the Go specification.
    pub precedence: Option<u8>,
}

/// Registry of all operators, longest spellings first so the lexer can munch greedily.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::AndNotEq, "&^=", None),
    op(OperatorId::ShlEq, "<<=", None),
    op(OperatorId::ShrEq, ">>=", None),
    op(OperatorId::AndNot, "&^", Some(5)),
    op(OperatorId::Shl, "<<", Some(5)),
    op(OperatorId::Shr, ">>", Some(5)),
    op(OperatorId::AndAnd, "&&", Some(2)),
    op(OperatorId::OrOr, "||", Some(1)),
    op(OperatorId::EqEq, "==", Some(3)),
    op(OperatorId::NotEq, "!=", Some(3)),
    op(OperatorId::LtEq, "<=", Some(3)),
    op(OperatorId::GtEq, ">=", Some(3)),
    op(OperatorId::Define, ":=", None),
    op(OperatorId::PlusEq, "+=", None),
    op(OperatorId::MinusEq, "-=", None),
    op(OperatorId::StarEq, "*=", None),
    op(OperatorId::SlashEq, "/=", None),
    op(OperatorId::PercentEq, "%=", None),
    op(OperatorId::AmpEq, "&=", None),
    op(OperatorId::PipeEq, "|=", None),
    op(OperatorId::CaretEq, "^=", None),
    op(OperatorId::Inc, "++", None),
    op(OperatorId::Dec, "--", None),
    op(OperatorId::Arrow, "<-", None),
    op(OperatorId::Plus, "+", Some(4)),
    op(OperatorId::Minus, "-", Some(4)),
    op(OperatorId::Star, "*", Some(5)),
    op(OperatorId::Slash, "/", Some(5)),
    op(OperatorId::Percent, "%", Some(5)),
    op(OperatorId::Amp, "&", Some(5)),
    op(OperatorId::Pipe, "|", Some(4)),
    op(OperatorId::Caret, "^", Some(4)),
    op(OperatorId::Not, "!", None),
    op(OperatorId::Lt, "<", Some(3)),
    op(OperatorId::Gt, ">", Some(3)),
    op(OperatorId::Assign, "=", None),
];

/// Canonical spelling.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Binary precedence of `id`, or `None` if it is not a binary operator.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    info_for(id).precedence
}

/// Return `true` for operators that may appear in unary prefix position inside constant expressions.
pub fn is_unary(id: OperatorId) -> bool {
    matches!(
        id,
        OperatorId::Plus | OperatorId::Minus | OperatorId::Caret | OperatorId::Not
    )
}

/// Full metadata.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// Find the longest operator spelling that prefixes `input`.
///
/// ## Returns
/// - The operator and the number of bytes it spans, or `None` if `input` does not start with an operator.
pub fn longest_prefix(input: &str) -> Option<(OperatorId, usize)> {
    OPERATORS
        .iter()
        .find(|o| input.starts_with(o.spelling))
        .map(|o| (o.id, o.spelling.len()))
}

const fn op(id: OperatorId, spelling: &'static str, precedence: Option<u8>) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
    }
}
