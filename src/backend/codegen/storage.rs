//! `sql.Scanner` / `driver.Valuer` emission

use super::Generator;
use super::cases::emit_switch;
use super::context::{OP_SCAN, TypeContext};

impl Generator<'_> {
    /// Emit `Scan` then `Value`.
    pub(crate) fn emit_storage(&mut self, ctx: &TypeContext<'_>) {
        self.emit_scan(ctx);
        self.emit_value(ctx);
    }

    fn emit_scan(&mut self, ctx: &TypeContext<'_>) {
        let conversion = ctx.conversion();
        let var = conversion.var();
        let go_type = conversion.go_type();
        tracing::trace!(type_name = ctx.type_name, var, go_type, "emitting Scan");

        self.imports.fmt = true;
        let imports = &mut self.imports;
        self.emitter.method(
            &format!("Scan implements sql.Scanner for {}", ctx.type_name),
            &format!("{} *{}", ctx.receiver(), ctx.type_name),
            "Scan(value interface{}) error",
            |e| {
                e.line(&format!("{}, ok := value.({})", var, go_type));
                e.block("if !ok", |e| {
                    e.line(&format!(
                        "return fmt.Errorf(\"failed to {} {} value: expected type `{}`, got `%T`\", value)",
                        OP_SCAN, ctx.type_name, go_type
                    ));
                });
                emit_switch(e, imports, ctx, OP_SCAN);
            },
        );
    }

    fn emit_value(&mut self, ctx: &TypeContext<'_>) {
        let recv = ctx.receiver();
        let returned = if ctx.textual {
            format!("{}.String()", recv)
        } else {
            format!("{}({})", ctx.conversion().go_type(), recv)
        };
        tracing::trace!(type_name = ctx.type_name, %returned, "emitting Value");

        self.imports.driver = true;
        self.emitter.method(
            &format!("Value implements driver.Valuer for {}", ctx.type_name),
            &format!("{} {}", recv, ctx.type_name),
            "Value() (driver.Value, error)",
            |e| e.line(&format!("return {}, nil", returned)),
        );
    }
}
