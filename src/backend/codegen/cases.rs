//! `switch` case and default-branch emission shared by `Scan` and `UnmarshalJSON`

use crate::analysis::RepresentationKind;
use crate::backend::go_emitter::GoEmitter;

use super::context::{ImportSet, TypeContext};

/// Emit `switch <var> { ... }`, the blank line after it and `return nil`.
///
/// `op` names the operation in the unknown-value error.
pub(super) fn emit_switch(e: &mut GoEmitter, imports: &mut ImportSet, ctx: &TypeContext<'_>, op: &str) {
    e.line(&format!("switch {} {{", ctx.conversion().var()));
    if ctx.multi_case() {
        tracing::trace!(type_name = ctx.type_name, "multi-case switch");
        emit_multi_case(e, ctx);
    } else {
        emit_single_case(e, ctx);
    }
    emit_default(e, imports, ctx, op);
    e.line("}");
    e.blank_line();
    e.line("return nil");
}

/// One `case` listing every literal, converting the input back to the enum type.
///
/// Nothing is emitted when the zero value was the only member.
fn emit_single_case(e: &mut GoEmitter, ctx: &TypeContext<'_>) {
    if ctx.set.values.is_empty() {
        return;
    }
    let labels: Vec<&str> = ctx
        .set
        .values
        .iter()
        .map(|v| match v.kind {
            RepresentationKind::String => v.literal.as_str(),
            _ => v.literal.trim_matches('"'),
        })
        .collect();
    e.line(&format!("case {}:", labels.join(", ")));
    e.indent();
    e.line(&format!("*{} = {}({})", ctx.receiver(), ctx.type_name, ctx.conversion().var()));
    e.dedent();
}

/// One `case Name.String():` per value, assigning the constant itself.
fn emit_multi_case(e: &mut GoEmitter, ctx: &TypeContext<'_>) {
    for value in &ctx.set.values {
        e.line(&format!("case {}.String():", value.name));
        e.indent();
        e.line(&format!("*{} = {}", ctx.receiver(), value.name));
        e.dedent();
    }
}

fn emit_default(e: &mut GoEmitter, imports: &mut ImportSet, ctx: &TypeContext<'_>, op: &str) {
    e.line("default:");
    e.indent();
    match ctx.default_target() {
        Some(target) => {
            e.line(&format!("*{} = {}", ctx.receiver(), target));
        }
        None => {
            imports.fmt = true;
            e.line(&format!(
                "return fmt.Errorf(\"failed to {} {} value: unrecognized value `%v`\", {})",
                op,
                ctx.type_name,
                ctx.conversion().var()
            ));
        }
    }
    e.dedent();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ReducedSet, Value};

    fn ctx(values: Vec<Value>, kind: RepresentationKind, default: Option<&str>) -> TypeContext<'static> {
        let set = ReducedSet {
            values,
            kind,
            receiver: "e".into(),
            is_textual: false,
            default_value: default.map(|n| Value::new(n, kind, kind.zero_literal())),
            error_on_unknown: default.is_none(),
        };
        TypeContext::new("E", set, false)
    }

    fn switch(ctx: &TypeContext<'_>, op: &str) -> (String, ImportSet) {
        let mut e = GoEmitter::new();
        let mut imports = ImportSet::default();
        emit_switch(&mut e, &mut imports, ctx, op);
        (e.finish(), imports)
    }

    #[test]
    fn test_single_case_with_default_assignment() {
        let values = vec![
            Value::new("One", RepresentationKind::SignedInteger, "1"),
            Value::new("Two", RepresentationKind::SignedInteger, "2"),
        ];
        let (out, imports) = switch(&ctx(values, RepresentationKind::SignedInteger, Some("Zero")), "scan");
        assert_eq!(out, "switch i {\ncase 1, 2:\n\t*e = E(i)\ndefault:\n\t*e = Zero\n}\n\nreturn nil\n");
        assert!(!imports.fmt);
    }

    #[test]
    fn test_unknown_value_error() {
        let values = vec![Value::new("A", RepresentationKind::String, "\"a\"")];
        let (out, imports) = switch(&ctx(values, RepresentationKind::String, None), "unmarshal");
        assert!(out.contains("case \"a\":\n\t*e = E(str)\n"));
        assert!(out.contains("return fmt.Errorf(\"failed to unmarshal E value: unrecognized value `%v`\", str)"));
        assert!(imports.fmt);
    }

    #[test]
    fn test_empty_case_list_emits_only_default() {
        let (out, _) = switch(&ctx(Vec::new(), RepresentationKind::UnsignedInteger, Some("Zero")), "scan");
        assert_eq!(out, "switch u {\ndefault:\n\t*e = Zero\n}\n\nreturn nil\n");
    }
}
