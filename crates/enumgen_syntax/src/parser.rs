//! Parser for the Go subset understood by enumgen
//!
//! Converts a token stream into a [`SourceFile`]. Constant declarations, type declarations and
//! function signatures are parsed in full; `var` initializers and function bodies are skipped.
//!
//! ## Examples
//!
//! ```rust
//! use enumgen_syntax::{lexer, parser};
//!
//! let source = "package colors\n\ntype Color int\n\nconst (\n\tRed Color = iota\n\tGreen\n)\n";
//! let tokens = lexer::lex(source).unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.declarations.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use enumgen_core::lang::keywords::KeywordId;
use enumgen_core::lang::operators::{self, OperatorId};
use enumgen_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
