//! Go syntax frontend for enumgen: lexer, parser, AST, diagnostics.
//!
//! Only the part of Go that enum discovery needs is modelled in detail: package clauses, imports,
//! `const` groups with their initializer expressions, `type` declarations and function/method
//! signatures. `var` initializers and function bodies are skipped by balanced-delimiter scanning.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve names or evaluate constants.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `enumgen_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use enumgen_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package p\n\ntype Color int\n").unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.package.node, "p");
//! assert_eq!(file.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
