//! Package symbol table
//!
//! Built once per loaded package from every parsed file:
//! - declared types, resolvable to an underlying predeclared basic type through named chains,
//! - a method registry keyed by receiver base type, in source order across files,
//! - evaluated package-level constants with their static type.
//!
//! Constants that cannot be evaluated are left out of the table (and logged at `debug`); callers
//! that need one treat its absence as a resolution failure.

use std::collections::{HashMap, HashSet};

use enumgen_core::lang::types::{self, BasicType};
use enumgen_syntax::ast::{BLANK, Declaration, Expr, FuncDecl, SourceFile, Spanned, TypeExpr, TypeSpec, ValueSpec};

use super::const_eval::{ConstDef, ConstEvaluator, ConstType, ConstValue, EvalError, TypeResolver, UntypedKind};

/// A declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSymbol {
    pub name: String,
    pub ty: TypeExpr,
    pub alias: bool,
    pub generic: bool,
}

/// Signature summary of a method attached to a named type.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    pub name: String,
    /// `None` for unnamed and blank receivers.
    pub receiver_name: Option<String>,
    pub pointer_receiver: bool,
    pub param_count: usize,
    pub results: Vec<TypeExpr>,
}

impl MethodDescriptor {
    fn from_decl(func: &FuncDecl) -> Option<(String, Self)> {
        let receiver = func.receiver.as_ref()?;
        let base = receiver.base_type()?.to_string();
        let descriptor = Self {
            name: func.name.node.clone(),
            receiver_name: receiver.name.clone(),
            pointer_receiver: receiver.is_pointer(),
            param_count: func.signature.params.len(),
            results: func.signature.results.iter().map(|p| p.ty.clone()).collect(),
        };
        Some((base, descriptor))
    }

    /// `String() string`
    pub fn is_stringer(&self) -> bool {
        self.name == "String"
            && self.param_count == 0
            && self.results.len() == 1
            && self.results[0].as_named() == Some("string")
    }
}

/// An evaluated package-level constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstSymbol {
    pub name: String,
    pub value: ConstValue,
    pub ty: ConstType,
}

/// Declared types of a package.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: HashMap<String, TypeSymbol>,
}

impl TypeTable {
    pub fn get(&self, name: &str) -> Option<&TypeSymbol> {
        self.types.get(name)
    }

    fn insert(&mut self, spec: &TypeSpec) {
        let name = spec.name.node.clone();
        if name == BLANK || self.types.contains_key(&name) {
            return;
        }
        self.types.insert(
            name.clone(),
            TypeSymbol {
                name,
                ty: spec.ty.node.clone(),
                alias: spec.alias,
                generic: spec.generic,
            },
        );
    }
}

impl TypeResolver for TypeTable {
    fn is_type(&self, name: &str) -> bool {
        self.types.contains_key(name) || types::from_str(name).is_some()
    }

    fn underlying_basic(&self, name: &str) -> Option<BasicType> {
        let mut seen = HashSet::new();
        let mut current = name;
        loop {
            let Some(symbol) = self.types.get(current) else {
                return types::from_str(current);
            };
            if symbol.generic || !seen.insert(current) {
                return None;
            }
            current = symbol.ty.as_named()?;
        }
    }
}

/// Everything enum discovery needs to know about a package.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: TypeTable,
    consts: HashMap<String, ConstSymbol>,
    unresolved: HashMap<String, EvalError>,
    methods: HashMap<String, Vec<MethodDescriptor>>,
}

impl SymbolTable {
    /// Build the table from the package's files, in file order.
    pub fn build<'f>(files: impl IntoIterator<Item = &'f SourceFile>) -> Self {
        let mut table = SymbolTable::default();
        let mut defs: HashMap<String, ConstDef> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for file in files {
            for decl in &file.declarations {
                match &decl.node {
                    Declaration::Type(group) => {
                        for spec in &group.specs {
                            table.types.insert(&spec.node);
                        }
                    }
                    Declaration::Func(func) => {
                        if let Some((base, method)) = MethodDescriptor::from_decl(func) {
                            table.methods.entry(base).or_default().push(method);
                        }
                    }
                    Declaration::Const(group) => {
                        collect_const_defs(&group.specs, &mut defs, &mut order);
                    }
                    Declaration::Var(_) => {}
                }
            }
        }

        let mut evaluator = ConstEvaluator::new(&defs, &table.types);
        let mut consts = HashMap::new();
        let mut unresolved = HashMap::new();
        for name in &order {
            match evaluator.eval(name) {
                Ok(constant) => {
                    tracing::trace!(constant = %name, value = %constant.value.literal(), "evaluated constant");
                    consts.insert(
                        name.clone(),
                        ConstSymbol {
                            name: name.clone(),
                            value: constant.value,
                            ty: constant.ty,
                        },
                    );
                }
                Err(err) => {
                    tracing::debug!(constant = %name, error = %err, "constant left unresolved");
                    unresolved.insert(name.clone(), err);
                }
            }
        }
        table.consts = consts;
        table.unresolved = unresolved;

        tracing::debug!(
            types = table.types.types.len(),
            constants = table.consts.len(),
            method_sets = table.methods.len(),
            "built symbol table"
        );
        table
    }

    pub fn constant(&self, name: &str) -> Option<&ConstSymbol> {
        self.consts.get(name)
    }

    /// Why a declared constant is missing from the table, if it failed to evaluate.
    pub fn unresolved(&self, name: &str) -> Option<&EvalError> {
        self.unresolved.get(name)
    }

    pub fn type_symbol(&self, name: &str) -> Option<&TypeSymbol> {
        self.types.get(name)
    }

    pub fn is_type(&self, name: &str) -> bool {
        self.types.is_type(name)
    }

    /// Follow alias declarations (`type A = B`) to the named type they denote.
    pub fn resolve_alias<'n>(&'n self, name: &'n str) -> &'n str {
        let mut current = name;
        let mut seen = HashSet::new();
        while let Some(symbol) = self.types.get(current) {
            if !symbol.alias || !seen.insert(current) {
                break;
            }
            match symbol.ty.as_named() {
                Some(target) => current = target,
                None => break,
            }
        }
        current
    }

    /// Underlying basic type of a declared or predeclared type name.
    pub fn underlying_basic(&self, name: &str) -> Option<BasicType> {
        self.types.underlying_basic(name)
    }

    /// Underlying basic type of a constant: its named type's, or the default type of an untyped
    /// constant.
    pub fn constant_basic(&self, constant: &ConstSymbol) -> Option<BasicType> {
        match &constant.ty {
            ConstType::Typed(name) => self.underlying_basic(name),
            ConstType::Untyped(kind) => types::from_str(match kind {
                UntypedKind::Bool => "bool",
                UntypedKind::String => "string",
                UntypedKind::Int => "int",
                UntypedKind::Rune => "rune",
                UntypedKind::Float => "float64",
            }),
        }
    }

    /// Methods declared on `type_name`, in source order.
    pub fn methods(&self, type_name: &str) -> &[MethodDescriptor] {
        self.methods.get(type_name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return `true` if `type_name` has a `String() string` method.
    pub fn is_stringer(&self, type_name: &str) -> bool {
        self.methods(type_name).iter().any(MethodDescriptor::is_stringer)
    }

    /// Receiver name of the first method of `type_name` that names its receiver, if any.
    pub fn receiver_hint(&self, type_name: &str) -> Option<&str> {
        self.methods(type_name)
            .iter()
            .find_map(|m| m.receiver_name.as_deref().filter(|n| !n.is_empty()))
    }
}

/// Expand one const declaration into per-name definitions, applying implicit repetition.
fn collect_const_defs(
    specs: &[Spanned<ValueSpec>],
    defs: &mut HashMap<String, ConstDef>,
    order: &mut Vec<String>,
) {
    let mut last: Option<(Option<TypeExpr>, &[Spanned<Expr>])> = None;

    for spec in specs {
        let spec = &spec.node;
        if !spec.values.is_empty() {
            last = Some((spec.ty.as_ref().map(|t| t.node.clone()), spec.values.as_slice()));
        }
        let Some((ty, values)) = &last else {
            continue;
        };

        for (i, name) in spec.names.iter().enumerate() {
            if name.node == BLANK {
                continue;
            }
            let Some(expr) = values.get(i) else {
                continue;
            };
            if defs.contains_key(&name.node) {
                tracing::debug!(constant = %name.node, "duplicate constant declaration ignored");
                continue;
            }
            defs.insert(
                name.node.clone(),
                ConstDef {
                    name: name.node.clone(),
                    expr: expr.clone(),
                    ty: ty.clone(),
                    iota: spec.iota,
                },
            );
            order.push(name.node.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_syntax::parser::parse_source;

    fn table(sources: &[&str]) -> SymbolTable {
        let files: Vec<SourceFile> = sources.iter().map(|s| parse_source(s).unwrap()).collect();
        SymbolTable::build(&files)
    }

    #[test]
    fn test_underlying_basic_through_named_chain() {
        let t = table(&["package p\ntype A B\ntype B = C\ntype C uint16\ntype D struct{}\n"]);
        assert_eq!(t.underlying_basic("A"), Some(BasicType::Uint16));
        assert_eq!(t.underlying_basic("D"), None);
        assert_eq!(t.underlying_basic("string"), Some(BasicType::String));
    }

    #[test]
    fn test_resolve_alias() {
        let t = table(&["package p\ntype Old = New\ntype New = Kind\ntype Kind string\n"]);
        assert_eq!(t.resolve_alias("Old"), "Kind");
        assert_eq!(t.resolve_alias("Kind"), "Kind");
        assert_eq!(t.resolve_alias("Unknown"), "Unknown");
    }

    #[test]
    fn test_underlying_basic_cycle_terminates() {
        let t = table(&["package p\ntype A B\ntype B A\n"]);
        assert_eq!(t.underlying_basic("A"), None);
    }

    #[test]
    fn test_constants_across_files() {
        let t = table(&[
            "package p\ntype Color int\nconst (\n\tRed Color = iota + Base\n\tGreen\n)\n",
            "package p\nconst Base = 10\n",
        ]);
        let green = t.constant("Green").unwrap();
        assert_eq!(green.value, ConstValue::Int(11));
        assert_eq!(green.ty, ConstType::Typed("Color".into()));
        assert_eq!(t.constant_basic(green), Some(BasicType::Int));
    }

    #[test]
    fn test_unevaluable_constant_left_out() {
        let t = table(&["package p\ntype Small uint8\nconst (\n\tA Small = 300\n\tB Small = 3\n)\n"]);
        assert!(t.constant("A").is_none());
        assert!(matches!(t.unresolved("A"), Some(EvalError::Overflow { .. })));
        assert!(t.constant("B").is_some());
    }

    #[test]
    fn test_blank_constants_are_not_symbols() {
        let t = table(&["package p\nconst (\n\t_ = iota\n\tA\n)\n"]);
        assert!(t.constant(BLANK).is_none());
        assert_eq!(t.constant("A").unwrap().value, ConstValue::Int(1));
    }

    #[test]
    fn test_method_registry_and_capabilities() {
        let t = table(&[
            "package p\ntype E int\nfunc (E) Values() []E { return nil }\n",
            "package p\nfunc (e *E) Set(v int) {}\nfunc (e E) String() string { return \"\" }\n",
        ]);
        let names: Vec<_> = t.methods("E").iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Values", "Set", "String"]);
        assert_eq!(t.receiver_hint("E"), Some("e"));
        assert!(t.is_stringer("E"));
        assert!(!t.is_stringer("Other"));
        assert_eq!(t.receiver_hint("Other"), None);
    }

    #[test]
    fn test_string_method_with_wrong_shape_is_not_stringer() {
        let t = table(&[
            "package p\ntype A int\nfunc (a A) String(x int) string { return \"\" }\ntype B int\nfunc (b B) String() (string, error) { return \"\", nil }\n",
        ]);
        assert!(!t.is_stringer("A"));
        assert!(!t.is_stringer("B"));
    }

    #[test]
    fn test_blank_receiver_gives_no_hint() {
        let t = table(&["package p\ntype A int\nfunc (_ A) X() {}\nfunc (v A) Y() {}\n"]);
        assert_eq!(t.receiver_hint("A"), Some("v"));
    }
}
