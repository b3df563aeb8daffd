//! enumgen frontend
//!
//! This module contains everything between files on disk and a queryable package:
//! - `lexer`, `parser`, `ast`, `diagnostics`: Go syntax, from the shared `enumgen_syntax` crate
//! - `constraints`: `//go:build` lines and `_GOOS`/`_GOARCH` file suffixes
//! - `const_eval`: constant expression evaluation
//! - `symbols`: types, methods and constants of a package
//! - `loader`: reading a package directory or file list

// Syntax components are provided by the shared enumgen_syntax crate.
pub use enumgen_syntax::{ast, diagnostics, lexer, parser};

pub mod const_eval;
pub mod constraints;
pub mod loader;
pub mod symbols;
