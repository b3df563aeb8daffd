/// Type expression and signature parsing.
///
/// ## Notes
/// - Struct and interface bodies are skipped; only their kind is recorded.
/// - Array lengths are skipped, since no caller needs them.
/// - Parameter lists use Go's grouping rule: in `(a, b int)` both `a` and `b` get type `int`,
///   while `(int, string)` is two unnamed parameters.
impl<'a> Parser<'a> {
    fn type_expr(&mut self) -> Result<TypeExpr, CompileError> {
        match self.peek().kind.clone() {
            TokenKind::Ident(_) => self.type_name(),
            TokenKind::Operator(OperatorId::Star) => {
                self.advance();
                Ok(TypeExpr::Pointer(Box::new(self.type_expr()?)))
            }
            TokenKind::Operator(OperatorId::Arrow) => {
                self.advance();
                self.expect_keyword(KeywordId::Chan, "Expected 'chan' after '<-'")?;
                Ok(TypeExpr::Chan(Box::new(self.type_expr()?)))
            }
            TokenKind::Punctuation(PunctuationId::LBracket) => {
                self.advance();
                if self.match_punct(PunctuationId::RBracket) {
                    return Ok(TypeExpr::Slice(Box::new(self.type_expr()?)));
                }
                if !self.match_punct(PunctuationId::Ellipsis) {
                    self.skip_until_punct(PunctuationId::RBracket)?;
                }
                self.expect_punct(PunctuationId::RBracket, "Expected ']' after array length")?;
                Ok(TypeExpr::Array(Box::new(self.type_expr()?)))
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.type_expr()?;
                self.expect_punct(PunctuationId::RParen, "Expected ')' after parenthesized type")?;
                Ok(inner)
            }
            TokenKind::Keyword(KeywordId::Map) => {
                self.advance();
                self.expect_punct(PunctuationId::LBracket, "Expected '[' after 'map'")?;
                let key = self.type_expr()?;
                self.expect_punct(PunctuationId::RBracket, "Expected ']' after map key type")?;
                let value = self.type_expr()?;
                Ok(TypeExpr::Map {
                    key: Box::new(key),
                    value: Box::new(value),
                })
            }
            TokenKind::Keyword(KeywordId::Chan) => {
                self.advance();
                self.match_op(OperatorId::Arrow);
                Ok(TypeExpr::Chan(Box::new(self.type_expr()?)))
            }
            TokenKind::Keyword(KeywordId::Func) => {
                self.advance();
                Ok(TypeExpr::Func(Box::new(self.signature()?)))
            }
            TokenKind::Keyword(KeywordId::Struct) => {
                self.advance();
                self.expect_braced_body("struct")?;
                Ok(TypeExpr::Struct)
            }
            TokenKind::Keyword(KeywordId::Interface) => {
                self.advance();
                self.expect_braced_body("interface")?;
                Ok(TypeExpr::Interface)
            }
            _ => Err(self.unexpected("Expected type")),
        }
    }

    /// Parse `Name`, `pkg.Name`, and either followed by type arguments.
    fn type_name(&mut self) -> Result<TypeExpr, CompileError> {
        let first = self.identifier()?;

        let base = if self.check_punct(PunctuationId::Dot) && matches!(self.peek_next().kind, TokenKind::Ident(_)) {
            self.advance();
            let name = self.identifier()?;
            TypeExpr::Qualified { package: first, name }
        } else {
            TypeExpr::Named(first)
        };

        if !self.check_punct(PunctuationId::LBracket) {
            return Ok(base);
        }

        self.advance();
        let mut args = Vec::new();
        while !self.check_punct(PunctuationId::RBracket) {
            args.push(self.type_expr()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RBracket, "Expected ']' after type arguments")?;

        Ok(TypeExpr::Instance {
            base: Box::new(base),
            args,
        })
    }

    fn expect_braced_body(&mut self, what: &str) -> Result<(), CompileError> {
        if !self.check_punct(PunctuationId::LBrace) {
            return Err(self.unexpected(&format!("Expected '{{' after '{}'", what)));
        }
        self.skip_balanced()?;
        Ok(())
    }

    /// Skip tokens up to (not including) `closer` at nesting depth zero.
    fn skip_until_punct(&mut self, closer: PunctuationId) -> Result<(), CompileError> {
        while !self.check_punct(closer) {
            if self.is_at_end() {
                return Err(self.unexpected(&format!(
                    "Expected '{}'",
                    enumgen_core::lang::punctuation::as_str(closer)
                )));
            }
            if self.check_punct(PunctuationId::LParen)
                || self.check_punct(PunctuationId::LBracket)
                || self.check_punct(PunctuationId::LBrace)
            {
                self.skip_balanced()?;
            } else {
                self.advance();
            }
        }
        Ok(())
    }

    // ========================================================================
    // Signatures
    // ========================================================================

    /// Parse a parameter list and an optional result list.
    fn signature(&mut self) -> Result<Signature, CompileError> {
        let params = self.parameters()?;

        let results = if self.check_punct(PunctuationId::LParen) {
            self.parameters()?
        } else if self.at_type_start() {
            vec![Param {
                name: None,
                ty: self.type_expr()?,
                variadic: false,
            }]
        } else {
            Vec::new()
        };

        Ok(Signature { params, results })
    }

    /// Parse `( ... )` into parameters, applying Go's name-grouping rule.
    fn parameters(&mut self) -> Result<Vec<Param>, CompileError> {
        let open = self.current_span();
        self.expect_punct(PunctuationId::LParen, "Expected '(' to start parameter list")?;

        let mut entries: Vec<Param> = Vec::new();
        while !self.check_punct(PunctuationId::RParen) {
            entries.push(self.parameter_entry()?);
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;

        if entries.iter().all(|p| p.name.is_none()) {
            return Ok(entries);
        }

        // Some entries are named: unnamed ones are really names sharing the next entry's type.
        let mut grouped = Vec::with_capacity(entries.len());
        let mut shared: Option<(TypeExpr, bool)> = None;
        for entry in entries.into_iter().rev() {
            if entry.name.is_some() {
                shared = Some((entry.ty.clone(), entry.variadic));
                grouped.push(entry);
                continue;
            }
            match (entry.ty.as_named(), &shared) {
                (Some(name), Some((ty, variadic))) if !entry.variadic => grouped.push(Param {
                    name: Some(name.to_string()),
                    ty: ty.clone(),
                    variadic: *variadic,
                }),
                _ => {
                    return Err(CompileError::syntax(
                        "Mixed named and unnamed parameters".to_string(),
                        open.merge(self.previous_span()),
                    ));
                }
            }
        }
        grouped.reverse();
        Ok(grouped)
    }

    /// Parse one comma-separated entry: `name T`, `name ...T`, `T` or `...T`.
    fn parameter_entry(&mut self) -> Result<Param, CompileError> {
        if matches!(self.peek().kind, TokenKind::Ident(_)) && self.next_starts_param_type() {
            let name = self.identifier()?;
            let variadic = self.match_punct(PunctuationId::Ellipsis);
            let ty = self.type_expr()?;
            return Ok(Param {
                name: Some(name),
                ty,
                variadic,
            });
        }

        let variadic = self.match_punct(PunctuationId::Ellipsis);
        let ty = self.type_expr()?;
        Ok(Param {
            name: None,
            ty,
            variadic,
        })
    }

    /// After an identifier in a parameter list, does a type follow (making the identifier a name)?
    ///
    /// `a []int` and `a [4]int` are named; `List[int]` is an unnamed generic instance.
    fn next_starts_param_type(&self) -> bool {
        let next = &self.peek_next().kind;
        match next {
            TokenKind::Ident(_) => true,
            TokenKind::Operator(OperatorId::Star | OperatorId::Arrow) => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::Map | KeywordId::Chan | KeywordId::Func | KeywordId::Struct | KeywordId::Interface
            ),
            TokenKind::Punctuation(PunctuationId::Ellipsis | PunctuationId::LParen) => true,
            TokenKind::Punctuation(PunctuationId::LBracket) => matches!(
                self.peek_at(2).kind,
                TokenKind::Punctuation(PunctuationId::RBracket | PunctuationId::Ellipsis) | TokenKind::Int(_)
            ),
            _ => false,
        }
    }

    /// Return `true` if the current token can begin a type (used for single unparenthesized results).
    fn at_type_start(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Ident(_) => true,
            TokenKind::Operator(OperatorId::Star | OperatorId::Arrow) => true,
            TokenKind::Punctuation(PunctuationId::LBracket | PunctuationId::LParen) => true,
            TokenKind::Keyword(id) => matches!(
                id,
                KeywordId::Map | KeywordId::Chan | KeywordId::Func | KeywordId::Struct | KeywordId::Interface
            ),
            _ => false,
        }
    }
}
