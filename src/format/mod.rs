//! Go source formatting for generated files
//!
//! Generated text is validated by lexing and parsing it with the Go frontend, then its layout is
//! normalized the way `gofmt` lays out the code the generator writes:
//! - trailing whitespace stripped
//! - runs of blank lines collapsed to one
//! - no blank line after an opening or before a closing brace
//! - exactly one trailing newline
//!
//! Horizontal layout (tab indentation, spacing inside lines) is already canonical in generated
//! code and is left untouched.

mod writer;

pub use writer::FormatWriter;

use crate::frontend::{diagnostics, lexer, parser};

/// Generated text that does not parse as Go
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("generated code is not valid Go:\n{report}")]
#[diagnostic(code(enumgen::format))]
pub struct FormatError {
    pub report: String,
}

/// Name used for generated source in error reports
const GENERATED_FILE: &str = "<generated>";

/// Validate and normalize Go source
///
/// ## Errors
/// Returns a [`FormatError`] with every lex or parse error if `source` is not valid Go.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    let report = |errors: Vec<diagnostics::CompileError>| {
        let mut msg = String::new();
        for err in &errors {
            msg.push_str(&diagnostics::format_error(GENERATED_FILE, source, err));
            msg.push('\n');
        }
        FormatError {
            report: msg.trim_end().to_string(),
        }
    };
    let tokens = lexer::lex(source).map_err(report)?;
    parser::parse(&tokens).map_err(report)?;

    let mut writer = FormatWriter::new();
    for line in source.lines() {
        writer.writeln(line);
    }
    Ok(writer.finish())
}

/// Check if source code is already formatted
pub fn check_formatted(source: &str) -> Result<bool, FormatError> {
    Ok(format_source(source)? == source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_normalizes_generated_layout() {
        let source = "// header\n\npackage p\n\n\nfunc (p P) X() int {\n\treturn 1  \n}\n\n";
        let formatted = format_source(source).unwrap();
        assert_eq!(formatted, "// header\n\npackage p\n\nfunc (p P) X() int {\n\treturn 1\n}\n");
        assert!(check_formatted(&formatted).unwrap());
        assert!(!check_formatted(source).unwrap());
    }

    #[test]
    fn test_format_is_idempotent() {
        let source = "package p\n\nimport (\n\t\"fmt\"\n)\n\nfunc f() {\n\tfmt.Println()\n}\n";
        let once = format_source(source).unwrap();
        assert_eq!(format_source(&once).unwrap(), once);
    }

    #[test]
    fn test_invalid_go_rejected() {
        let err = format_source("package p\n\nfunc (p P) X( {\n").unwrap_err();
        assert!(err.report.contains("<generated>:"));
    }
}
