//! Diagnostics for lexing and parsing Go source
//!
//! Errors carry a byte span; [`format_error`] turns one into a `file:line:col` report with the
//! offending source line, in the same shape the rest of the tool prints.

use crate::ast::Span;

/// A lex or parse error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    #[label("here")]
    pub span: Span,
    pub kind: ErrorKind,
    #[help]
    pub hint: Option<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lex,
            hint: None,
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.end.saturating_sub(span.start))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lex error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Format an error with source context as a string
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let width = format!("{}", line_num).len();

    let mut out = format!("{}: {}\n", error.kind, error.message);
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {:>width$} |\n", "", width = width));
    out.push_str(&format!("  {:>width$} | {}\n", line_num, line_text, width = width));
    out.push_str(&format!(
        "  {:>width$} | {}^\n",
        "",
        " ".repeat(col_num.saturating_sub(1)),
        width = width
    ));
    if let Some(hint) = &error.hint {
        out.push_str(&format!("  = hint: {}\n", hint));
    }
    out
}

/// Get 1-based line number, 1-based column, and the text of the line containing `offset`
pub fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[offset..].find('\n').map(|i| offset + i).unwrap_or(source.len());
    let line_num = source[..line_start].matches('\n').count() + 1;
    let col_num = source[line_start..offset].chars().count() + 1;
    (line_num, col_num, &source[line_start..line_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_info() {
        let src = "package p\n\nconst X = @\n";
        let offset = src.find('@').unwrap();
        let (line, col, text) = get_line_info(src, offset);
        assert_eq!(line, 3);
        assert_eq!(col, 11);
        assert_eq!(text, "const X = @");
    }

    #[test]
    fn test_format_error_points_at_column() {
        let src = "package p\nconst X = @\n";
        let err = CompileError::new("Unexpected character '@'".to_string(), Span::new(20, 21))
            .with_hint("remove it");
        let out = format_error("enum.go", src, &err);
        assert!(out.starts_with("lex error: Unexpected character '@'"));
        assert!(out.contains("--> enum.go:2:11"));
        assert!(out.contains("const X = @"));
        assert!(out.contains("hint: remove it"));
    }
}
