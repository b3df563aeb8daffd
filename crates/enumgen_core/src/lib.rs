//! Provide shared, pure vocabulary and literal helpers for the enumgen Go frontend and code emitter.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the syntax frontend can use to tokenize and classify Go source, and
//! - the generator can use to render Go literals exactly the way the Go toolchain prints them.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Current scope: Go keyword/operator/punctuation registries, predeclared basic types, and Go string quoting.

pub mod lang;
pub mod strings;
