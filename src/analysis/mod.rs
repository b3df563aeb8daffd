//! Enum discovery
//!
//! - `value`: the value model
//! - `scanner`: per-file collection of one type's constants
//! - `reducer`: dedupe, ordering and default-value policy
//! - `errors`: generation-time errors

pub mod errors;
pub mod reducer;
pub mod scanner;
pub mod value;

pub use errors::GenerateError;
pub use reducer::{ReducePolicy, ReducedSet, reduce};
pub use scanner::{ScanResult, scan};
pub use value::{RepresentationKind, Value};

use crate::frontend::loader::Package;

/// Scan every file of the package for `type_name`, concatenating results in file order.
///
/// ## Errors
/// Returns the first scanner error.
pub fn collect(package: &Package, type_name: &str) -> Result<ScanResult, GenerateError> {
    let mut all = ScanResult::default();
    for file in &package.files {
        let found = scan(&file.ast, &package.symbols, type_name)?;
        tracing::trace!(file = %file.path.display(), values = found.values.len(), "scanned file");
        all.values.extend(found.values);
        all.saw_placeholder_member |= found.saw_placeholder_member;
    }
    Ok(all)
}
