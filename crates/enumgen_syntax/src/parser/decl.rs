/// Declaration parsing.
///
/// This chunk parses the file header (package clause and imports) and the four kinds of top-level
/// declarations. Grouped forms (`const ( ... )`) are handled here too.
///
/// ## Notes
/// - Each spec inside a `const` group records its zero-based position as `iota`.
/// - `var` specs keep only their names; initializers are skipped.
/// - Function bodies and type parameter lists are skipped as balanced token runs.
impl<'a> Parser<'a> {
    // ========================================================================
    // File header
    // ========================================================================

    fn package_clause(&mut self) -> Result<Spanned<Ident>, CompileError> {
        self.expect_keyword(KeywordId::Package, "Expected 'package' clause")?;
        let name = self.identifier_spanned()?;
        if name.node == BLANK {
            return Err(CompileError::syntax(
                "Invalid package name _".to_string(),
                name.span,
            ));
        }
        self.end_of_decl("Expected ';' after package clause")?;
        Ok(name)
    }

    fn import_decl(&mut self) -> Result<Vec<ImportSpec>, CompileError> {
        self.expect_keyword(KeywordId::Import, "Expected 'import'")?;

        let mut specs = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            self.skip_semicolons();
            while !self.check_punct(PunctuationId::RParen) {
                if self.is_at_end() {
                    return Err(self.unexpected("Expected ')' to close import group"));
                }
                specs.push(self.import_spec()?);
                self.end_of_spec("Expected ';' after import spec")?;
                self.skip_semicolons();
            }
            self.advance();
        } else {
            specs.push(self.import_spec()?);
        }

        self.end_of_decl("Expected ';' after import declaration")?;
        Ok(specs)
    }

    fn import_spec(&mut self) -> Result<ImportSpec, CompileError> {
        let alias = if self.match_punct(PunctuationId::Dot) {
            Some(".".to_string())
        } else if matches!(self.peek().kind, TokenKind::Ident(_)) {
            Some(self.identifier()?)
        } else {
            None
        };
        let path = self.string_literal()?;
        Ok(ImportSpec { alias, path })
    }

    // ========================================================================
    // Top-level declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Spanned<Declaration>, CompileError> {
        let start = self.current_span();

        let decl = match self.peek().keyword_id() {
            Some(KeywordId::Const) => Declaration::Const(self.const_decl()?),
            Some(KeywordId::Var) => Declaration::Var(self.var_decl()?),
            Some(KeywordId::Type) => Declaration::Type(self.type_decl()?),
            Some(KeywordId::Func) => Declaration::Func(self.func_decl()?),
            Some(KeywordId::Import) => {
                return Err(CompileError::syntax(
                    "Imports must appear before other declarations".to_string(),
                    start,
                ));
            }
            _ => return Err(self.unexpected("Expected declaration")),
        };

        let span = start.merge(self.previous_span());
        self.end_of_decl("Expected ';' after top-level declaration")?;
        Ok(Spanned::new(decl, span))
    }

    /// Consume the `;` that ends a top-level declaration (or accept `Eof`).
    fn end_of_decl(&mut self, msg: &str) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::Semicolon) || self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Parse `const X = 1` or `const ( ... )`.
    fn const_decl(&mut self) -> Result<ConstDecl, CompileError> {
        self.expect_keyword(KeywordId::Const, "Expected 'const'")?;

        if !self.match_punct(PunctuationId::LParen) {
            let spec = self.const_spec(0)?;
            return Ok(ConstDecl {
                grouped: false,
                specs: vec![spec],
            });
        }

        let mut specs = Vec::new();
        self.skip_semicolons();
        while !self.check_punct(PunctuationId::RParen) {
            if self.is_at_end() {
                return Err(self.unexpected("Expected ')' to close const group"));
            }
            let iota = specs.len();
            specs.push(self.const_spec(iota)?);
            self.end_of_spec("Expected ';' or ')' after constant spec")?;
            self.skip_semicolons();
        }
        self.advance();

        Ok(ConstDecl { grouped: true, specs })
    }

    /// Parse one constant spec: `A, B [T] = x, y`, or a bare name list inside a group.
    fn const_spec(&mut self, iota: usize) -> Result<Spanned<ValueSpec>, CompileError> {
        let start = self.current_span();
        let names = self.identifier_list_spanned()?;

        let mut ty = None;
        let mut values = Vec::new();
        let at_spec_end = self.check_punct(PunctuationId::Semicolon)
            || self.check_punct(PunctuationId::RParen)
            || self.is_at_end();

        if !at_spec_end {
            if !self.check_op(OperatorId::Assign) {
                let ty_start = self.current_span();
                let parsed = self.type_expr()?;
                ty = Some(Spanned::new(parsed, ty_start.merge(self.previous_span())));
            }
            self.expect_op(OperatorId::Assign, "Expected '=' in constant declaration")?;
            values = self.expression_list()?;
        }

        let span = start.merge(self.previous_span());

        if values.is_empty() && iota == 0 {
            return Err(CompileError::syntax(
                "Missing init expr for const declaration".to_string(),
                span,
            ));
        }
        if !values.is_empty() && values.len() != names.len() {
            let msg = if values.len() < names.len() {
                "Missing init expr for const declaration"
            } else {
                "Extra init expr in const declaration"
            };
            return Err(CompileError::syntax(msg.to_string(), span));
        }

        Ok(Spanned::new(
            ValueSpec {
                names,
                ty,
                values,
                iota,
            },
            span,
        ))
    }

    /// Parse a `var` declaration, keeping only the declared names.
    fn var_decl(&mut self) -> Result<VarDecl, CompileError> {
        self.expect_keyword(KeywordId::Var, "Expected 'var'")?;

        let mut names = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            self.skip_semicolons();
            while !self.check_punct(PunctuationId::RParen) {
                if self.is_at_end() {
                    return Err(self.unexpected("Expected ')' to close var group"));
                }
                names.extend(self.identifier_list_spanned()?);
                self.skip_to_spec_end()?;
                self.end_of_spec("Expected ';' or ')' after variable spec")?;
                self.skip_semicolons();
            }
            self.advance();
        } else {
            names = self.identifier_list_spanned()?;
            self.skip_to_spec_end()?;
        }

        Ok(VarDecl { names })
    }

    /// Parse `type T ...` or `type ( ... )`.
    fn type_decl(&mut self) -> Result<TypeDecl, CompileError> {
        self.expect_keyword(KeywordId::Type, "Expected 'type'")?;

        let mut specs = Vec::new();
        if self.match_punct(PunctuationId::LParen) {
            self.skip_semicolons();
            while !self.check_punct(PunctuationId::RParen) {
                if self.is_at_end() {
                    return Err(self.unexpected("Expected ')' to close type group"));
                }
                specs.push(self.type_spec()?);
                self.end_of_spec("Expected ';' or ')' after type spec")?;
                self.skip_semicolons();
            }
            self.advance();
        } else {
            specs.push(self.type_spec()?);
        }

        Ok(TypeDecl { specs })
    }

    fn type_spec(&mut self) -> Result<Spanned<TypeSpec>, CompileError> {
        let start = self.current_span();
        let name = self.identifier_spanned()?;

        let mut generic = false;
        if self.check_punct(PunctuationId::LBracket) && self.looks_like_type_params() {
            self.skip_balanced()?;
            generic = true;
        }

        let alias = self.match_op(OperatorId::Assign);
        let ty_start = self.current_span();
        let ty = self.type_expr()?;
        let ty = Spanned::new(ty, ty_start.merge(self.previous_span()));

        Ok(Spanned::new(
            TypeSpec {
                name,
                alias,
                generic,
                ty,
            },
            start.merge(self.previous_span()),
        ))
    }

    /// Distinguish `type T[P any] ...` from the array type in `type T [N]int`.
    fn looks_like_type_params(&self) -> bool {
        if !matches!(self.peek_at(1).kind, TokenKind::Ident(_)) {
            return false;
        }
        match &self.peek_at(2).kind {
            TokenKind::Ident(_) => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::Interface | KeywordId::Map | KeywordId::Func | KeywordId::Chan | KeywordId::Struct
            ),
            TokenKind::Punctuation(id) => matches!(
                id,
                PunctuationId::Comma | PunctuationId::Tilde | PunctuationId::LBracket
            ),
            _ => false,
        }
    }

    /// Parse a function or method declaration, skipping its body.
    fn func_decl(&mut self) -> Result<FuncDecl, CompileError> {
        self.expect_keyword(KeywordId::Func, "Expected 'func'")?;

        let receiver = if self.check_punct(PunctuationId::LParen) {
            Some(self.receiver()?)
        } else {
            None
        };

        let name = self.identifier_spanned()?;

        // Type parameters carry no information enum discovery needs.
        if self.check_punct(PunctuationId::LBracket) {
            self.skip_balanced()?;
        }

        let signature = self.signature()?;

        let has_body = if self.check_punct(PunctuationId::LBrace) {
            self.skip_balanced()?;
            true
        } else {
            false
        };

        Ok(FuncDecl {
            receiver,
            name,
            signature,
            has_body,
        })
    }

    /// Parse `(r *T)`, `(T)` or `(_ T[K])`.
    fn receiver(&mut self) -> Result<Receiver, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected '(' before receiver")?;

        let named = matches!(self.peek().kind, TokenKind::Ident(_))
            && (matches!(self.peek_next().kind, TokenKind::Ident(_))
                || self.peek_next().kind.is_operator(OperatorId::Star)
                || self.peek_next().kind.is_punctuation(PunctuationId::LParen));

        let name = if named {
            let ident = self.identifier()?;
            (ident != BLANK).then_some(ident)
        } else {
            None
        };

        let ty_start = self.current_span();
        let ty = self.type_expr()?;
        let ty = Spanned::new(ty, ty_start.merge(self.previous_span()));

        self.match_punct(PunctuationId::Comma);
        self.expect_punct(PunctuationId::RParen, "Expected ')' after receiver")?;

        Ok(Receiver { name, ty })
    }
}
