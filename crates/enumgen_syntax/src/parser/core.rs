/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at the next
///   top-level declaration keyword.
/// - Statement boundaries are explicit `;` tokens; the lexer inserts them at line ends.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `enumgen_syntax::lexer`. It must end with `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`SourceFile`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(mut self) -> Result<SourceFile, Vec<CompileError>> {
        if self.tokens.is_empty() {
            return Err(vec![CompileError::syntax(
                "Empty token stream".to_string(),
                Span::default(),
            )]);
        }

        self.skip_semicolons();
        let package = match self.package_clause() {
            Ok(package) => package,
            Err(e) => return Err(vec![e]),
        };

        let mut imports = Vec::new();
        self.skip_semicolons();
        while self.check_keyword(KeywordId::Import) {
            match self.import_decl() {
                Ok(mut specs) => imports.append(&mut specs),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_semicolons();
        }

        let mut declarations = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(decl) => declarations.push(decl),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.skip_semicolons();
        }

        if self.errors.is_empty() {
            Ok(SourceFile {
                package,
                imports,
                declarations,
            })
        } else {
            Err(self.errors)
        }
    }
}
