#![forbid(unsafe_code)]
//! enumgen: Go enum conversion method generator
//!
//! Reads a Go package, discovers the constants of the requested enum types and writes a Go file
//! with `Scan`/`Value` (`database/sql`) and `UnmarshalJSON`/`MarshalJSON` methods for each type.
//! This crate provides the frontend (package loading, constant evaluation), analysis (value
//! discovery and reduction), backend (Go code generation) and the output formatter.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The codegen modules emit Go `return fmt.Errorf(...)` branches as *string literals*; unknown
//!   values are reported by the generated program at runtime, not by the generator.

pub mod analysis;
pub mod backend;
pub mod cli;
pub mod config;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;

pub use analysis::{GenerateError, RepresentationKind, Value};
pub use backend::Generator;
pub use config::{GeneratorConfig, MethodFamilies};
pub use format::{FormatError, check_formatted, format_source};
pub use frontend::loader::{Package, PackageSource, load_package};
