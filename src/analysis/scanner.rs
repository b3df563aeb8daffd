//! Declaration scanner
//!
//! Walks the top-level `const` declarations of one file and collects the constants of one enum
//! type. Each spec's type is tracked on its own:
//! - an explicit annotation (`A MyEnum = ...`) sets the current type; a qualified or composite
//!   annotation clears it,
//! - an unannotated spec with initializers takes the callee of a conversion (`B = MyEnum(2)`) as
//!   its type, and clears it for anything else,
//! - an unannotated spec without initializers inherits the current type.

use enumgen_core::lang::types::BasicType;
use enumgen_syntax::ast::{BLANK, ConstDecl, Declaration, SourceFile, Spanned, ValueSpec};

use super::errors::GenerateError;
use super::value::{RepresentationKind, Value};
use crate::frontend::symbols::SymbolTable;

/// Constants of one type found in one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub values: Vec<Value>,
    /// A `_` member of the type was declared.
    pub saw_placeholder_member: bool,
}

/// Collect the constants of `type_name` declared in `file`.
///
/// ## Errors
/// - [`GenerateError::Resolution`] if a member has no evaluated value in the symbol table
/// - [`GenerateError::UnsupportedRepresentation`] if a member's underlying type is neither
///   string-like nor integer-like
pub fn scan(file: &SourceFile, symbols: &SymbolTable, type_name: &str) -> Result<ScanResult, GenerateError> {
    let mut result = ScanResult::default();
    for decl in &file.declarations {
        if let Declaration::Const(group) = &decl.node {
            scan_const_decl(group, symbols, type_name, &mut result)?;
        }
    }
    Ok(result)
}

fn scan_const_decl(
    group: &ConstDecl,
    symbols: &SymbolTable,
    type_name: &str,
    result: &mut ScanResult,
) -> Result<(), GenerateError> {
    let mut current: Option<&str> = None;

    for spec in &group.specs {
        current = spec_type(&spec.node, current);
        if current != Some(type_name) {
            continue;
        }

        for name in &spec.node.names {
            if name.node == BLANK {
                result.saw_placeholder_member = true;
                continue;
            }
            let value = resolve(&name.node, symbols, type_name)?;
            tracing::trace!(constant = %value.name, literal = %value.literal, kind = %value.kind, "found value");
            result.values.push(value);
        }
    }

    Ok(())
}

/// The type a spec's members belong to, given the type in effect before it.
fn spec_type<'a>(spec: &'a ValueSpec, current: Option<&'a str>) -> Option<&'a str> {
    if let Some(ty) = &spec.ty {
        return ty.node.as_named();
    }
    match spec.values.first() {
        Some(Spanned { node, .. }) => node.call_ident(),
        None => current,
    }
}

fn resolve(name: &str, symbols: &SymbolTable, type_name: &str) -> Result<Value, GenerateError> {
    let Some(constant) = symbols.constant(name) else {
        let reason = symbols
            .unresolved(name)
            .map(|err| err.to_string())
            .unwrap_or_else(|| "not declared as a package constant".to_string());
        return Err(GenerateError::Resolution {
            type_name: type_name.to_string(),
            constant: name.to_string(),
            reason,
        });
    };

    let unsupported = |underlying: String| GenerateError::UnsupportedRepresentation {
        type_name: type_name.to_string(),
        constant: name.to_string(),
        underlying,
    };
    let Some(basic) = symbols.constant_basic(constant) else {
        let described = constant
            .ty
            .type_name()
            .and_then(|t| symbols.type_symbol(t))
            .map(|t| t.ty.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(unsupported(described));
    };

    let kind = if constant.value.is_string() {
        RepresentationKind::String
    } else if basic.is_integer() {
        if basic.is_unsigned() {
            RepresentationKind::UnsignedInteger
        } else {
            RepresentationKind::SignedInteger
        }
    } else {
        return Err(unsupported(basic_name(basic)));
    };
    if kind == RepresentationKind::String && !basic.is_string() {
        return Err(unsupported(basic_name(basic)));
    }

    let named = constant.ty.type_name().map(|t| symbols.resolve_alias(t)).unwrap_or(type_name);
    Ok(Value::new(name, kind, constant.value.literal())
        .with_textual_representation(symbols.is_stringer(named))
        .with_receiver_hint(symbols.receiver_hint(named).unwrap_or_default()))
}

fn basic_name(basic: BasicType) -> String {
    basic.name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::loader::{Package, load_sources};
    use std::path::PathBuf;

    fn package(source: &str) -> Package {
        load_sources(PathBuf::from("pkg"), vec![(PathBuf::from("pkg/a.go"), source.to_string())]).unwrap()
    }

    fn scan_type(source: &str, type_name: &str) -> Result<ScanResult, GenerateError> {
        let package = package(source);
        scan(&package.files[0].ast, &package.symbols, type_name)
    }

    fn names(result: &ScanResult) -> Vec<&str> {
        result.values.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_explicit_type_and_inheritance() {
        let src = "package p\ntype E int\nconst (\n\tA E = iota\n\tB\n\tC\n)\n";
        let result = scan_type(src, "E").unwrap();
        assert_eq!(names(&result), vec!["A", "B", "C"]);
        let literals: Vec<_> = result.values.iter().map(|v| v.literal.as_str()).collect();
        assert_eq!(literals, vec!["0", "1", "2"]);
        assert!(result.values.iter().all(|v| v.kind == RepresentationKind::SignedInteger));
        assert!(!result.saw_placeholder_member);
    }

    #[test]
    fn test_conversion_initializer_sets_type() {
        let src = "package p\ntype E uint8\nconst (\n\tX = 5\n\tA = E(iota)\n\tB\n\tC = 7\n\tD\n)\n";
        let result = scan_type(src, "E").unwrap();
        assert_eq!(names(&result), vec!["A", "B"]);
        assert_eq!(result.values[1].literal, "2");
        assert_eq!(result.values[1].kind, RepresentationKind::UnsignedInteger);
    }

    #[test]
    fn test_mixed_group_filters_by_type() {
        let src = "package p\ntype E string\ntype F string\nconst (\n\tA E = \"a\"\n\tB F = \"b\"\n\tC\n\tD E = \"d\"\n)\n";
        let result = scan_type(src, "E").unwrap();
        assert_eq!(names(&result), vec!["A", "D"]);
        assert_eq!(result.values[0].literal, "\"a\"");
        assert_eq!(result.values[0].kind, RepresentationKind::String);
    }

    #[test]
    fn test_qualified_annotation_clears_type() {
        let src = "package p\ntype E int\nconst (\n\tA E = 1\n\tB other.E = 2\n\tC\n)\n";
        let result = scan_type(src, "E").unwrap();
        assert_eq!(names(&result), vec!["A"]);
    }

    #[test]
    fn test_placeholder_member() {
        let src = "package p\ntype E int\nconst (\n\t_ E = iota\n\tA\n\tB\n)\n";
        let result = scan_type(src, "E").unwrap();
        assert!(result.saw_placeholder_member);
        assert_eq!(names(&result), vec!["A", "B"]);
        assert_eq!(result.values[0].literal, "1");
    }

    #[test]
    fn test_placeholder_of_other_type_ignored() {
        let src = "package p\ntype E int\nconst (\n\t_ = iota\n\tA E = 1\n)\n";
        assert!(!scan_type(src, "E").unwrap().saw_placeholder_member);
    }

    #[test]
    fn test_methods_give_capability_and_hint() {
        let src = "package p\ntype E int\nconst A E = 1\nfunc (E) Values() []E { return nil }\nfunc (e E) String() string { return \"\" }\n";
        let value = &scan_type(src, "E").unwrap().values[0];
        assert!(value.has_textual_representation);
        assert_eq!(value.receiver_hint, "e");
    }

    #[test]
    fn test_unsupported_representation() {
        let src = "package p\ntype E float64\nconst A E = 1.5\n";
        assert!(matches!(
            scan_type(src, "E"),
            Err(GenerateError::UnsupportedRepresentation { ref underlying, .. }) if underlying == "float64"
        ));
    }

    #[test]
    fn test_unresolvable_member() {
        let src = "package p\ntype E uint8\nconst A E = 256\n";
        let err = scan_type(src, "E").unwrap_err();
        assert!(matches!(err, GenerateError::Resolution { ref constant, .. } if constant == "A"));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_no_members_is_empty_not_error() {
        let result = scan_type("package p\ntype E int\n", "E").unwrap();
        assert!(result.values.is_empty());
    }
}
