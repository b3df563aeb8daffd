#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on the declaration shapes enum discovery relies on and on the parser's
/// tolerance for Go it does not model in detail (function bodies, var initializers, generics).
mod tests {
    use super::*;

    fn parse_str(source: &str) -> Result<SourceFile, Vec<CompileError>> {
        parse_source(source)
    }

    fn const_specs(file: &SourceFile, index: usize) -> &[Spanned<ValueSpec>] {
        match &file.declarations[index].node {
            Declaration::Const(c) => &c.specs,
            other => panic!("Expected const declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_package_and_imports() {
        let source = "package colors\n\nimport \"fmt\"\nimport (\n\tdb \"database/sql\"\n\t. \"strings\"\n)\n";
        let file = parse_str(source).unwrap();
        assert_eq!(file.package.node, "colors");
        assert_eq!(file.imports.len(), 3);
        assert_eq!(file.imports[0].path, "fmt");
        assert_eq!(file.imports[1].alias.as_deref(), Some("db"));
        assert_eq!(file.imports[2].alias.as_deref(), Some("."));
    }

    #[test]
    fn test_const_group_with_iota_and_repetition() {
        let source = r#"package p

type MyEnum string

const (
	One   MyEnum = "One"
	Two   MyEnum = "Two"
	Three MyEnum = "Three"
	_ = iota
	Four
)
"#;
        let file = parse_str(source).unwrap();
        let specs = const_specs(&file, 1);
        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].node.names[0].node, "One");
        assert_eq!(specs[0].node.ty.as_ref().map(|t| t.node.clone()), Some(TypeExpr::Named("MyEnum".into())));
        assert!(matches!(&specs[0].node.values[0].node, Expr::String(s) if s == "One"));
        assert_eq!(specs[3].node.names[0].node, BLANK);
        assert!(specs[3].node.ty.is_none());
        assert!(specs[4].node.values.is_empty());
        assert_eq!(specs[4].node.iota, 4);
    }

    #[test]
    fn test_single_const_and_multi_name_spec() {
        let file = parse_str("package p\nconst A, B = 1, 2\n").unwrap();
        let specs = const_specs(&file, 0);
        assert_eq!(specs[0].node.names.len(), 2);
        assert_eq!(specs[0].node.values.len(), 2);
    }

    #[test]
    fn test_const_expression_precedence() {
        let file = parse_str("package p\nconst X = 1 + 2*3 << 1\n").unwrap();
        let value = &const_specs(&file, 0)[0].node.values[0].node;
        // `*` and `<<` share the top level, so this is 1 + ((2*3) << 1).
        match value {
            Expr::Binary(left, BinaryOp::Add, right) => {
                assert!(matches!(left.node, Expr::Int(1)));
                assert!(matches!(right.node, Expr::Binary(_, BinaryOp::Shl, _)));
            }
            other => panic!("Expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_conversion_and_unary() {
        let file = parse_str("package p\nconst X = MyEnum(-iota + 1)\n").unwrap();
        let value = &const_specs(&file, 0)[0].node.values[0].node;
        assert_eq!(value.call_ident(), Some("MyEnum"));
    }

    #[test]
    fn test_missing_init_expr_in_first_spec() {
        let err = parse_str("package p\nconst (\n\tA\n)\n").unwrap_err();
        assert!(err[0].message.contains("Missing init expr"));
    }

    #[test]
    fn test_method_declarations() {
        let source = r#"package p

func (m MyEnum) String() string { return string(m) }

func (m *MyEnum) Scan(value interface{}) error {
	if value == nil {
		return nil
	}
	return nil
}

func (MyEnum) Values() []MyEnum { return nil }
"#;
        let file = parse_str(source).unwrap();
        assert_eq!(file.declarations.len(), 3);

        let Declaration::Func(string_fn) = &file.declarations[0].node else {
            panic!("Expected func");
        };
        let receiver = string_fn.receiver.as_ref().unwrap();
        assert_eq!(receiver.name.as_deref(), Some("m"));
        assert_eq!(receiver.base_type(), Some("MyEnum"));
        assert!(!receiver.is_pointer());
        assert!(string_fn.signature.params.is_empty());
        assert_eq!(string_fn.signature.results.len(), 1);
        assert_eq!(string_fn.signature.results[0].ty, TypeExpr::Named("string".into()));
        assert!(string_fn.has_body);

        let Declaration::Func(scan_fn) = &file.declarations[1].node else {
            panic!("Expected func");
        };
        assert!(scan_fn.receiver.as_ref().unwrap().is_pointer());
        assert_eq!(scan_fn.signature.params.len(), 1);

        let Declaration::Func(values_fn) = &file.declarations[2].node else {
            panic!("Expected func");
        };
        assert_eq!(values_fn.receiver.as_ref().unwrap().name, None);
    }

    #[test]
    fn test_parameter_grouping() {
        let file = parse_str("package p\nfunc f(a, b int, c ...string) (n int, err error)\n").unwrap();
        let Declaration::Func(f) = &file.declarations[0].node else {
            panic!("Expected func");
        };
        let names: Vec<_> = f.signature.params.iter().map(|p| p.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(f.signature.params[1].ty, TypeExpr::Named("int".into()));
        assert!(f.signature.params[2].variadic);
        assert_eq!(f.signature.results.len(), 2);
        assert!(!f.has_body);
    }

    #[test]
    fn test_unnamed_parameters() {
        let file = parse_str("package p\nfunc f(int, fmt.Stringer) error\n").unwrap();
        let Declaration::Func(f) = &file.declarations[0].node else {
            panic!("Expected func");
        };
        assert!(f.signature.params.iter().all(|p| p.name.is_none()));
        assert_eq!(
            f.signature.params[1].ty,
            TypeExpr::Qualified {
                package: "fmt".into(),
                name: "Stringer".into()
            }
        );
    }

    #[test]
    fn test_type_declarations() {
        let source = r#"package p

type (
	Color int
	Alias = string
	List[T any] []T
	Grid [4][4]int
	Point struct {
		X, Y int
	}
	Remote sql.NullString
)
"#;
        let file = parse_str(source).unwrap();
        let Declaration::Type(decl) = &file.declarations[0].node else {
            panic!("Expected type declaration");
        };
        let specs: Vec<_> = decl.specs.iter().map(|s| &s.node).collect();
        assert_eq!(specs.len(), 6);
        assert_eq!(specs[0].ty.node, TypeExpr::Named("int".into()));
        assert!(specs[1].alias);
        assert!(specs[2].generic);
        assert!(!specs[3].generic);
        assert!(matches!(specs[3].ty.node, TypeExpr::Array(_)));
        assert_eq!(specs[4].ty.node, TypeExpr::Struct);
        assert!(matches!(specs[5].ty.node, TypeExpr::Qualified { .. }));
    }

    #[test]
    fn test_var_initializers_are_skipped() {
        let source = r#"package p

var (
	names = map[string]int{"a": 1, "b": 2}
	handler = func() {
		println("x")
	}
)

var x, y = 1, 2
"#;
        let file = parse_str(source).unwrap();
        let Declaration::Var(group) = &file.declarations[0].node else {
            panic!("Expected var");
        };
        let names: Vec<_> = group.names.iter().map(|n| n.node.as_str()).collect();
        assert_eq!(names, vec!["names", "handler"]);
        let Declaration::Var(single) = &file.declarations[1].node else {
            panic!("Expected var");
        };
        assert_eq!(single.names.len(), 2);
    }

    #[test]
    fn test_generic_method_receiver() {
        let file = parse_str("package p\nfunc (l *List[T]) Len() int { return 0 }\n").unwrap();
        let Declaration::Func(f) = &file.declarations[0].node else {
            panic!("Expected func");
        };
        assert_eq!(f.receiver.as_ref().unwrap().base_type(), Some("List"));
    }

    #[test]
    fn test_recovers_and_reports_multiple_errors() {
        let source = "package p\nconst = 1\ntype T int\nconst ( A = )\n";
        let err = parse_str(source).unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_str("const A = 1\n").unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err[0].message.contains("package"));
    }

    #[test]
    fn test_unclosed_function_body() {
        let err = parse_str("package p\nfunc f() {\n").unwrap_err();
        assert!(err[0].message.contains("Unclosed"));
    }
}
