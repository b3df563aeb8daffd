//! enumgen backend
//!
//! This module turns discovered enum types into Go source text.
//!
//! The pipeline is:
//! 1. `analysis` scans and reduces the constants of each requested type
//! 2. `Generator` appends the storage and/or marshal methods per type
//! 3. `Generator::finish` prepends the header; `format` normalizes the result
//!
//! ## Module Organization
//!
//! - `codegen/` - Method generation
//!   - `mod.rs` - `Generator` and the per-type entry point
//!   - `context.rs` - Per-type context, conversions and import tracking
//!   - `cases.rs` - `switch` case and default-branch emission
//!   - `storage.rs` - `Scan` / `Value`
//!   - `marshal.rs` - `UnmarshalJSON` / `MarshalJSON`
//!   - `preamble.rs` - Provenance line, package clause and imports
//! - `go_emitter.rs` - Low-level Go code string builder

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod codegen;
pub mod go_emitter;

pub use codegen::Generator;
