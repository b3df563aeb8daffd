/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Skipping balanced token runs (`skip_balanced`, `skip_to_spec_end`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `offset` positions ahead, clamped to `Eof`.
    fn peek_at(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    fn expect_op(&mut self, id: OperatorId, msg: &str) -> Result<&Token, CompileError> {
        if self.check_op(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Build a syntax error at the current token.
    fn unexpected(&self, msg: &str) -> CompileError {
        CompileError::syntax(format!("{}, found {:?}", msg, self.peek().kind), self.peek().span)
    }

    fn skip_semicolons(&mut self) {
        while self.match_punct(PunctuationId::Semicolon) {}
    }

    /// Consume the `;` that ends a spec, allowing it to be omitted before a closing `)` or at `Eof`.
    fn end_of_spec(&mut self, msg: &str) -> Result<(), CompileError> {
        if self.match_punct(PunctuationId::Semicolon)
            || self.check_punct(PunctuationId::RParen)
            || self.is_at_end()
        {
            Ok(())
        } else {
            Err(self.unexpected(msg))
        }
    }

    /// Skip a bracketed run starting at the current opening delimiter, including its closer.
    ///
    /// Nested `()`, `[]` and `{}` are tracked so the closer is the one that balances the opener.
    fn skip_balanced(&mut self) -> Result<Span, CompileError> {
        let start = self.current_span();
        let Some(open) = self.peek().kind.punctuation_id() else {
            return Err(self.unexpected("Expected an opening delimiter"));
        };
        let mut stack = vec![open];
        self.advance();

        while let Some(&top) = stack.last() {
            if self.is_at_end() {
                return Err(CompileError::syntax(
                    format!("Unclosed '{}'", enumgen_core::lang::punctuation::as_str(top)),
                    start,
                ));
            }
            let token = self.advance();
            let span = token.span;
            if let Some(id) = token.kind.punctuation_id() {
                match id {
                    PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace => stack.push(id),
                    PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace => {
                        let expected = enumgen_core::lang::punctuation::closing(top);
                        if expected != Some(id) {
                            return Err(CompileError::syntax(
                                format!("Mismatched '{}'", enumgen_core::lang::punctuation::as_str(id)),
                                span,
                            ));
                        }
                        stack.pop();
                    }
                    _ => {}
                }
            }
        }
        Ok(start.merge(self.tokens[self.pos.saturating_sub(1)].span))
    }

    /// Skip the remainder of a spec: everything up to a `;` or an unbalanced `)` at depth zero.
    ///
    /// Neither terminator is consumed.
    fn skip_to_spec_end(&mut self) -> Result<(), CompileError> {
        loop {
            if self.is_at_end()
                || self.check_punct(PunctuationId::Semicolon)
                || self.check_punct(PunctuationId::RParen)
            {
                return Ok(());
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
    }

    /// Skip ahead to the next top-level declaration keyword.
    fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.check_keyword(KeywordId::Func)
                || self.check_keyword(KeywordId::Type)
                || self.check_keyword(KeywordId::Const)
                || self.check_keyword(KeywordId::Var)
                || self.check_keyword(KeywordId::Import)
            {
                return;
            }
            self.advance();
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }
}
