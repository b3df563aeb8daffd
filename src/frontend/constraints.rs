//! Build constraints
//!
//! Decides whether a `.go` file takes part in the build, the way the Go toolchain does:
//! - a `//go:build` line in the file header (`linux && !cgo`, `(a || b) && c`), and
//! - a `_GOOS`, `_GOARCH` or `_GOOS_GOARCH` suffix on the file name.
//!
//! Requested tags come from `--tags`; the host operating system and architecture are always set,
//! as are `gc` and every `go1.N` release tag.

use std::collections::HashSet;

/// Operating systems known to the Go toolchain.
const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux", "nacl", "netbsd",
    "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

/// Architectures known to the Go toolchain.
const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips", "mipsle", "mips64",
    "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le", "riscv", "riscv64", "s390", "s390x",
    "sparc", "sparc64", "wasm",
];

/// Operating systems that satisfy the `unix` tag.
const UNIX_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "linux", "netbsd", "openbsd",
    "solaris",
];

/// A parsed `//go:build` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Tag(String),
    Not(Box<Constraint>),
    And(Box<Constraint>, Box<Constraint>),
    Or(Box<Constraint>, Box<Constraint>),
}

/// A malformed `//go:build` line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid //go:build line: {message}")]
pub struct ConstraintError {
    pub message: String,
}

impl ConstraintError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The set of satisfied build tags.
#[derive(Debug, Clone)]
pub struct BuildContext {
    tags: HashSet<String>,
    goos: String,
    goarch: String,
}

impl BuildContext {
    /// Build context for the host platform plus the requested tags.
    pub fn new(tags: &[String]) -> Self {
        Self::with_target(tags, host_goos(), host_goarch())
    }

    /// Build context for an explicit target platform.
    pub fn with_target(tags: &[String], goos: &str, goarch: &str) -> Self {
        Self {
            tags: tags.iter().filter(|t| !t.is_empty()).cloned().collect(),
            goos: goos.to_string(),
            goarch: goarch.to_string(),
        }
    }

    /// Return `true` if `tag` is set in this context.
    pub fn satisfies(&self, tag: &str) -> bool {
        if self.tags.contains(tag) || tag == self.goos || tag == self.goarch || tag == "gc" {
            return true;
        }
        if tag.starts_with("go1.") {
            return true;
        }
        match tag {
            "unix" => UNIX_OS.contains(&self.goos.as_str()),
            "linux" => self.goos == "android",
            "darwin" => self.goos == "ios",
            "solaris" => self.goos == "illumos",
            _ => false,
        }
    }

    /// Apply the `_GOOS` / `_GOARCH` / `_GOOS_GOARCH` file name rule.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        let stem = file_name.strip_suffix(".go").unwrap_or(file_name);
        let stem = stem.strip_suffix("_test").unwrap_or(stem);
        let parts: Vec<&str> = stem.split('_').collect();
        let n = parts.len();
        if n < 2 {
            return true;
        }

        let last = parts[n - 1];
        if n >= 3 && KNOWN_OS.contains(&parts[n - 2]) && KNOWN_ARCH.contains(&last) {
            return self.satisfies(parts[n - 2]) && self.satisfies(last);
        }
        if KNOWN_OS.contains(&last) || KNOWN_ARCH.contains(&last) {
            return self.satisfies(last);
        }
        true
    }

    /// Return `true` if a file with this name and source takes part in the build.
    ///
    /// ## Errors
    /// Returns a [`ConstraintError`] if the file's `//go:build` line cannot be parsed.
    pub fn includes(&self, file_name: &str, source: &str) -> Result<bool, ConstraintError> {
        if !self.matches_file_name(file_name) {
            return Ok(false);
        }
        match find_constraint(source)? {
            Some(constraint) => Ok(constraint.eval(self)),
            None => Ok(true),
        }
    }
}

impl Constraint {
    /// Parse the expression part of a `//go:build` line.
    pub fn parse(expr: &str) -> Result<Constraint, ConstraintError> {
        let tokens = tokenize(expr)?;
        let mut parser = ExprParser { tokens, pos: 0 };
        let constraint = parser.or_expr()?;
        if parser.pos != parser.tokens.len() {
            return Err(ConstraintError::new(format!(
                "unexpected '{}'",
                parser.tokens[parser.pos].spelling()
            )));
        }
        Ok(constraint)
    }

    /// Evaluate against a build context.
    pub fn eval(&self, ctx: &BuildContext) -> bool {
        match self {
            Constraint::Tag(tag) => ctx.satisfies(tag),
            Constraint::Not(inner) => !inner.eval(ctx),
            Constraint::And(a, b) => a.eval(ctx) && b.eval(ctx),
            Constraint::Or(a, b) => a.eval(ctx) || b.eval(ctx),
        }
    }
}

/// Find and parse the `//go:build` line in a file header, if any.
///
/// Only blank lines and comments may precede it; scanning stops at the first other line.
pub fn find_constraint(source: &str) -> Result<Option<Constraint>, ConstraintError> {
    let mut in_block_comment = false;
    for line in source.lines() {
        let line = line.trim();
        if in_block_comment {
            if line.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("//go:build") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return Constraint::parse(rest).map(Some);
            }
            continue;
        }
        if line.starts_with("//") {
            continue;
        }
        if line.starts_with("/*") {
            in_block_comment = !line.contains("*/");
            continue;
        }
        break;
    }
    Ok(None)
}

/// Host GOOS name.
pub fn host_goos() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Host GOARCH name.
pub fn host_goarch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "powerpc" => "ppc",
        "loongarch64" => "loong64",
        "wasm32" => "wasm",
        other => other,
    }
}

// ============================================================================
// Expression parsing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tok {
    Tag(String),
    Not,
    And,
    Or,
    LParen,
    RParen,
}

impl Tok {
    fn spelling(&self) -> &str {
        match self {
            Tok::Tag(t) => t,
            Tok::Not => "!",
            Tok::And => "&&",
            Tok::Or => "||",
            Tok::LParen => "(",
            Tok::RParen => ")",
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<Tok>, ConstraintError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' => {}
            '!' => tokens.push(Tok::Not),
            '(' => tokens.push(Tok::LParen),
            ')' => tokens.push(Tok::RParen),
            '&' if chars.peek() == Some(&'&') => {
                chars.next();
                tokens.push(Tok::And);
            }
            '|' if chars.peek() == Some(&'|') => {
                chars.next();
                tokens.push(Tok::Or);
            }
            c if c.is_alphanumeric() || c == '_' || c == '.' => {
                let mut tag = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' || next == '.' {
                        tag.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Tok::Tag(tag));
            }
            other => return Err(ConstraintError::new(format!("unexpected character '{}'", other))),
        }
    }
    if tokens.is_empty() {
        return Err(ConstraintError::new("empty expression"));
    }
    Ok(tokens)
}

struct ExprParser {
    tokens: Vec<Tok>,
    pos: usize,
}

impl ExprParser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn or_expr(&mut self) -> Result<Constraint, ConstraintError> {
        let mut left = self.and_expr()?;
        while self.peek() == Some(&Tok::Or) {
            self.pos += 1;
            let right = self.and_expr()?;
            left = Constraint::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Constraint, ConstraintError> {
        let mut left = self.not_expr()?;
        while self.peek() == Some(&Tok::And) {
            self.pos += 1;
            let right = self.not_expr()?;
            left = Constraint::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> Result<Constraint, ConstraintError> {
        match self.peek().cloned() {
            Some(Tok::Not) => {
                self.pos += 1;
                Ok(Constraint::Not(Box::new(self.not_expr()?)))
            }
            Some(Tok::LParen) => {
                self.pos += 1;
                let inner = self.or_expr()?;
                if self.peek() != Some(&Tok::RParen) {
                    return Err(ConstraintError::new("missing ')'"));
                }
                self.pos += 1;
                Ok(inner)
            }
            Some(Tok::Tag(tag)) => {
                self.pos += 1;
                Ok(Constraint::Tag(tag))
            }
            Some(other) => Err(ConstraintError::new(format!("unexpected '{}'", other.spelling()))),
            None => Err(ConstraintError::new("unexpected end of expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_amd64(tags: &[&str]) -> BuildContext {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        BuildContext::with_target(&tags, "linux", "amd64")
    }

    #[test]
    fn test_parse_precedence() {
        let c = Constraint::parse("a || b && !c").unwrap();
        assert_eq!(
            c,
            Constraint::Or(
                Box::new(Constraint::Tag("a".into())),
                Box::new(Constraint::And(
                    Box::new(Constraint::Tag("b".into())),
                    Box::new(Constraint::Not(Box::new(Constraint::Tag("c".into()))))
                ))
            )
        );
    }

    #[test]
    fn test_eval_with_tags_and_platform() {
        let ctx = linux_amd64(&["integration"]);
        assert!(Constraint::parse("integration").unwrap().eval(&ctx));
        assert!(Constraint::parse("linux && amd64").unwrap().eval(&ctx));
        assert!(Constraint::parse("unix && go1.21").unwrap().eval(&ctx));
        assert!(!Constraint::parse("windows || (darwin && arm64)").unwrap().eval(&ctx));
        assert!(!Constraint::parse("!integration").unwrap().eval(&ctx));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Constraint::parse("").is_err());
        assert!(Constraint::parse("(a").is_err());
        assert!(Constraint::parse("a &&").is_err());
        assert!(Constraint::parse("a b").is_err());
        assert!(Constraint::parse("a & b").is_err());
    }

    #[test]
    fn test_find_constraint_in_header() {
        let src = "// Copyright notice\n\n//go:build ignore\n\npackage p\n";
        assert_eq!(find_constraint(src).unwrap(), Some(Constraint::Tag("ignore".into())));
    }

    #[test]
    fn test_constraint_after_package_is_ignored() {
        let src = "package p\n\n//go:build ignore\n";
        assert_eq!(find_constraint(src).unwrap(), None);
    }

    #[test]
    fn test_file_name_rules() {
        let ctx = linux_amd64(&[]);
        assert!(ctx.matches_file_name("enum.go"));
        assert!(ctx.matches_file_name("enum_linux.go"));
        assert!(ctx.matches_file_name("enum_linux_amd64.go"));
        assert!(!ctx.matches_file_name("enum_windows.go"));
        assert!(!ctx.matches_file_name("enum_linux_arm64.go"));
        assert!(!ctx.matches_file_name("enum_arm.go"));
        assert!(ctx.matches_file_name("linux.go"));
        assert!(ctx.matches_file_name("my_enum.go"));
    }

    #[test]
    fn test_includes_combines_both_rules() {
        let ctx = linux_amd64(&["extra"]);
        assert!(ctx.includes("a.go", "//go:build extra\n\npackage p\n").unwrap());
        assert!(!ctx.includes("a.go", "//go:build !extra\n\npackage p\n").unwrap());
        assert!(!ctx.includes("a_windows.go", "package p\n").unwrap());
        assert!(ctx.includes("a.go", "//go:build (\n").is_err());
    }
}
