//! Per-type generation context and import tracking

use crate::analysis::{RepresentationKind, ReducedSet};

/// Operation names used in generated error messages.
pub(crate) const OP_SCAN: &str = "scan";
pub(crate) const OP_UNMARSHAL: &str = "unmarshal";

/// Import paths the generated code may need.
pub(crate) const IMPORT_DRIVER: &str = "database/sql/driver";
pub(crate) const IMPORT_FMT: &str = "fmt";
pub(crate) const IMPORT_STRCONV: &str = "strconv";

/// Packages referenced by the emitted method bodies, accumulated across every type of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSet {
    pub driver: bool,
    pub fmt: bool,
    pub strconv: bool,
}

impl ImportSet {
    /// Import paths in `gofmt` order.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        if self.driver {
            paths.push(IMPORT_DRIVER);
        }
        if self.fmt {
            paths.push(IMPORT_FMT);
        }
        if self.strconv {
            paths.push(IMPORT_STRCONV);
        }
        paths
    }
}

/// Go type incoming values are converted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    String,
    Int,
    Uint,
}

impl Conversion {
    /// Go type name
    pub fn go_type(self) -> &'static str {
        match self {
            Conversion::String => "string",
            Conversion::Int => "int",
            Conversion::Uint => "uint",
        }
    }

    /// Variable the converted input is bound to
    pub fn var(self) -> &'static str {
        match self {
            Conversion::String => "str",
            Conversion::Int => "i",
            Conversion::Uint => "u",
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Conversion::String)
    }
}

/// Everything the emitters need for one type. Built fresh for every `generate` call.
#[derive(Debug, Clone)]
pub struct TypeContext<'a> {
    pub type_name: &'a str,
    pub set: ReducedSet,
    /// The textual representation is both requested and available
    pub textual: bool,
}

impl<'a> TypeContext<'a> {
    pub fn new(type_name: &'a str, set: ReducedSet, prefer_textual: bool) -> Self {
        let textual = prefer_textual && set.is_textual;
        Self { type_name, set, textual }
    }

    pub fn receiver(&self) -> &str {
        &self.set.receiver
    }

    pub fn conversion(&self) -> Conversion {
        match self.set.kind {
            _ if self.textual => Conversion::String,
            RepresentationKind::String => Conversion::String,
            RepresentationKind::SignedInteger => Conversion::Int,
            RepresentationKind::UnsignedInteger => Conversion::Uint,
        }
    }

    /// One `case` per value matched on `Name.String()`, instead of one `case` listing literals.
    pub fn multi_case(&self) -> bool {
        self.set.kind.is_integer() && self.textual
    }

    /// Constant assigned by the `default` branch, or `None` if unknown input is an error.
    pub fn default_target(&self) -> Option<&str> {
        if self.set.error_on_unknown {
            return None;
        }
        self.set.default_value.as_ref().map(|v| v.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Value;

    fn set(kind: RepresentationKind, is_textual: bool, default: Option<&str>, error_on_unknown: bool) -> ReducedSet {
        ReducedSet {
            values: vec![Value::new("One", kind, "1")],
            kind,
            receiver: "e".into(),
            is_textual,
            default_value: default.map(|name| Value::new(name, kind, kind.zero_literal())),
            error_on_unknown,
        }
    }

    #[test]
    fn test_conversion_by_kind() {
        let ctx = TypeContext::new("E", set(RepresentationKind::SignedInteger, false, None, true), false);
        assert_eq!(ctx.conversion(), Conversion::Int);
        let ctx = TypeContext::new("E", set(RepresentationKind::UnsignedInteger, false, None, true), false);
        assert_eq!(ctx.conversion(), Conversion::Uint);
        let ctx = TypeContext::new("E", set(RepresentationKind::String, false, None, true), false);
        assert_eq!(ctx.conversion(), Conversion::String);
    }

    #[test]
    fn test_textual_needs_request_and_capability() {
        let ctx = TypeContext::new("E", set(RepresentationKind::SignedInteger, true, None, true), false);
        assert!(!ctx.textual);
        assert!(!ctx.multi_case());

        let ctx = TypeContext::new("E", set(RepresentationKind::SignedInteger, true, None, true), true);
        assert_eq!(ctx.conversion(), Conversion::String);
        assert!(ctx.multi_case());

        let ctx = TypeContext::new("E", set(RepresentationKind::String, true, None, true), true);
        assert!(ctx.textual);
        assert!(!ctx.multi_case());
    }

    #[test]
    fn test_default_target() {
        let ctx = TypeContext::new("E", set(RepresentationKind::SignedInteger, false, Some("Zero"), false), false);
        assert_eq!(ctx.default_target(), Some("Zero"));
        let ctx = TypeContext::new("E", set(RepresentationKind::SignedInteger, false, Some("Zero"), true), false);
        assert_eq!(ctx.default_target(), None);
    }

    #[test]
    fn test_import_paths_in_order() {
        let imports = ImportSet {
            driver: true,
            fmt: true,
            strconv: true,
        };
        assert_eq!(imports.paths(), vec!["database/sql/driver", "fmt", "strconv"]);
        assert!(ImportSet::default().paths().is_empty());
    }
}
