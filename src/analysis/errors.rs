//! Generation-time errors.
//!
//! Each variant aborts generation of the type it names. Errors that the *generated* Go code reports
//! at runtime are part of the emitted text and never appear here.

/// Error while discovering or reducing the values of one enum type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GenerateError {
    #[error("no values defined for type {type_name}")]
    #[diagnostic(
        code(enumgen::discovery),
        help("declare constants with the type annotated, e.g. `const A MyEnum = \"a\"`")
    )]
    Discovery { type_name: String },

    #[error("can't handle non-integer, non-string constant type {type_name}: {constant} has underlying type {underlying}")]
    #[diagnostic(code(enumgen::unsupported_representation))]
    UnsupportedRepresentation {
        type_name: String,
        constant: String,
        underlying: String,
    },

    #[error("type {type_name} does not implement fmt.Stringer")]
    #[diagnostic(
        code(enumgen::capability_mismatch),
        help("add a `String() string` method to the type, or generate without --stringer")
    )]
    CapabilityMismatch { type_name: String },

    #[error("no value for constant {constant} of type {type_name}: {reason}")]
    #[diagnostic(code(enumgen::resolution))]
    Resolution {
        type_name: String,
        constant: String,
        reason: String,
    },
}

impl GenerateError {
    /// Name of the enum type whose generation failed.
    pub fn type_name(&self) -> &str {
        match self {
            GenerateError::Discovery { type_name }
            | GenerateError::UnsupportedRepresentation { type_name, .. }
            | GenerateError::CapabilityMismatch { type_name }
            | GenerateError::Resolution { type_name, .. } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_codes_are_stable() {
        let err = GenerateError::Discovery {
            type_name: "Color".into(),
        };
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("enumgen::discovery"));
        assert_eq!(err.to_string(), "no values defined for type Color");
        assert_eq!(err.type_name(), "Color");
    }

    #[test]
    fn test_capability_message_names_type() {
        let err = GenerateError::CapabilityMismatch {
            type_name: "Level".into(),
        };
        assert_eq!(err.to_string(), "type Level does not implement fmt.Stringer");
        assert!(err.help().is_some());
    }
}
