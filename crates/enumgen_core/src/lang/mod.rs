//! Go language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation and predeclared basic types.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser and resolver.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   constant evaluation, emission).
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("const"), Some(KeywordId::Const));
//! assert_eq!(keywords::as_str(KeywordId::Const), "const");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod types;
