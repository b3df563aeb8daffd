//! enumgen version information.
//!
//! The CLI `--version` output and the provenance line of generated files agree on this value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The enumgen version string (for example, `0.1.0`).
pub const ENUMGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
