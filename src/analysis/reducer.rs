//! Value-set reduction
//!
//! Turns every value scanned for one type (all files, in file-then-declaration order) into the
//! ordered set the emitter works from, and settles the default-value policy.

use std::collections::HashSet;

use super::errors::GenerateError;
use super::value::{RepresentationKind, Value};

/// Policy inputs for one type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReducePolicy {
    /// Configured error-on-unknown
    pub error_on_unknown: bool,
    /// Textual representation requested
    pub prefer_textual: bool,
    /// A `_` member of the type was declared in some file
    pub saw_placeholder_member: bool,
}

/// The reduced value set of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedSet {
    /// Values enumerated in case labels, ordered by literal text
    pub values: Vec<Value>,
    pub kind: RepresentationKind,
    pub receiver: String,
    /// The type has a `String() string` method
    pub is_textual: bool,
    /// The declared zero value, if any
    pub default_value: Option<Value>,
    /// Unknown input is an error rather than the default value
    pub error_on_unknown: bool,
}

/// Reduce the values of `type_name`.
///
/// ## Errors
/// - [`GenerateError::Discovery`] if `values` is empty
/// - [`GenerateError::CapabilityMismatch`] if a textual representation is requested for an integer
///   type without a `String() string` method
pub fn reduce(type_name: &str, values: Vec<Value>, policy: ReducePolicy) -> Result<ReducedSet, GenerateError> {
    if values.is_empty() {
        return Err(GenerateError::Discovery {
            type_name: type_name.to_string(),
        });
    }
    let detected = values.len();

    let mut seen = HashSet::new();
    let mut values: Vec<Value> = values.into_iter().filter(|v| seen.insert(v.literal.clone())).collect();
    values.sort_by(|a, b| a.literal.cmp(&b.literal));

    let first = &values[0];
    let kind = first.kind;
    let is_textual = first.has_textual_representation;
    let receiver = if first.receiver_hint.is_empty() {
        type_name.chars().next().map(|c| c.to_lowercase().collect()).unwrap_or_default()
    } else {
        first.receiver_hint.clone()
    };
    tracing::debug!(type_name, detected, distinct = values.len(), %kind, %receiver, is_textual, "reduced values");

    if kind.is_integer() && policy.prefer_textual && !is_textual {
        return Err(GenerateError::CapabilityMismatch {
            type_name: type_name.to_string(),
        });
    }

    let zero = kind.zero_literal();
    let default_index = values.binary_search_by(|v| v.literal.as_str().cmp(zero)).ok();
    let default_value = default_index.map(|i| values[i].clone());
    let error_on_unknown = policy.error_on_unknown || policy.saw_placeholder_member || default_value.is_none();

    if let Some(index) = default_index {
        if !error_on_unknown {
            tracing::debug!(default = %values[index].name, "zero value handled by the default branch");
            values.remove(index);
        }
    }

    Ok(ReducedSet {
        values,
        kind,
        receiver,
        is_textual,
        default_value,
        error_on_unknown,
    })
}
