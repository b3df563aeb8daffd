//! `json.Unmarshaler` / `json.Marshaler` emission

use super::Generator;
use super::cases::emit_switch;
use super::context::{Conversion, OP_UNMARSHAL, TypeContext};

impl Generator<'_> {
    /// Emit `UnmarshalJSON` then `MarshalJSON`.
    pub(crate) fn emit_marshal(&mut self, ctx: &TypeContext<'_>) {
        self.emit_unmarshal_json(ctx);
        self.emit_marshal_json(ctx);
    }

    fn emit_unmarshal_json(&mut self, ctx: &TypeContext<'_>) {
        let conversion = ctx.conversion();
        tracing::trace!(type_name = ctx.type_name, go_type = conversion.go_type(), "emitting UnmarshalJSON");

        let parse = match conversion {
            Conversion::Int => Some("ParseInt"),
            Conversion::Uint => Some("ParseUint"),
            Conversion::String => None,
        };
        if parse.is_some() {
            self.imports.strconv = true;
            self.imports.fmt = true;
        }

        let imports = &mut self.imports;
        self.emitter.method(
            &format!("UnmarshalJSON implements json.Unmarshaler for {}", ctx.type_name),
            &format!("{} *{}", ctx.receiver(), ctx.type_name),
            "UnmarshalJSON(data []byte) error",
            |e| {
                e.line("str := string(data)");
                if let Some(parse) = parse {
                    e.line(&format!("v, err := strconv.{}(str, 10, 64)", parse));
                    e.block("if err != nil", |e| {
                        e.line(&format!(
                            "return fmt.Errorf(\"failed to {} {} value: could not convert `[]byte` to `{}`: %v\", err)",
                            OP_UNMARSHAL,
                            ctx.type_name,
                            conversion.go_type()
                        ));
                    });
                    e.line(&format!("{} := {}(v)", conversion.var(), conversion.go_type()));
                }
                emit_switch(e, imports, ctx, OP_UNMARSHAL);
            },
        );
    }

    fn emit_marshal_json(&mut self, ctx: &TypeContext<'_>) {
        let recv = ctx.receiver();
        let conversion = ctx.conversion();
        let bytes = if ctx.textual {
            format!("{}.String()", recv)
        } else if conversion == Conversion::String {
            recv.to_string()
        } else {
            self.imports.fmt = true;
            format!("fmt.Sprintf(\"%d\", {}({}))", conversion.go_type(), recv)
        };
        tracing::trace!(type_name = ctx.type_name, %bytes, "emitting MarshalJSON");

        self.emitter.method(
            &format!("MarshalJSON implements json.Marshaler for {}", ctx.type_name),
            &format!("{} {}", recv, ctx.type_name),
            "MarshalJSON() ([]byte, error)",
            |e| e.line(&format!("return []byte({}), nil", bytes)),
        );
    }
}
