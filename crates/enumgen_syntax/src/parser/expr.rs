/// Expression parsing (constant initializers).
///
/// Binary expressions use precedence climbing with Go's five precedence levels, taken from the
/// operator registry. Postfix forms are limited to what constant expressions use: selectors
/// (`pkg.Name`) and calls (`len("x")`, `MyEnum(1)`, `[]byte("x")`).
impl<'a> Parser<'a> {
    fn expression_list(&mut self) -> Result<Vec<Spanned<Expr>>, CompileError> {
        let mut list = vec![self.expression()?];
        while self.match_punct(PunctuationId::Comma) {
            list.push(self.expression()?);
        }
        Ok(list)
    }

    fn expression(&mut self) -> Result<Spanned<Expr>, CompileError> {
        self.binary_expr(1)
    }

    fn binary_expr(&mut self, min_prec: u8) -> Result<Spanned<Expr>, CompileError> {
        let mut left = self.unary_expr()?;

        loop {
            let Some(id) = self.peek().operator_id() else {
                break;
            };
            let Some(prec) = operators::binary_precedence(id) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            let Some(op) = binary_op(id) else {
                break;
            };
            self.advance();

            let right = self.binary_expr(prec + 1)?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }

        Ok(left)
    }

    fn unary_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span();
        let op = match self.peek().operator_id() {
            Some(id) if operators::is_unary(id) => unary_op(id),
            _ => None,
        };

        if let Some(op) = op {
            self.advance();
            let operand = self.unary_expr()?;
            let span = start.merge(operand.span);
            return Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), span));
        }

        self.postfix_expr()
    }

    fn postfix_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let mut expr = self.primary_expr()?;

        loop {
            if self.match_punct(PunctuationId::Dot) {
                let name = self.identifier()?;
                let span = expr.span.merge(self.previous_span());
                expr = Spanned::new(Expr::Selector(Box::new(expr), name), span);
            } else if self.match_punct(PunctuationId::LParen) {
                let mut args = Vec::new();
                while !self.check_punct(PunctuationId::RParen) {
                    args.push(self.expression()?);
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
                self.expect_punct(PunctuationId::RParen, "Expected ')' after arguments")?;
                let span = expr.span.merge(self.previous_span());
                expr = Spanned::new(
                    Expr::Call {
                        func: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn primary_expr(&mut self) -> Result<Spanned<Expr>, CompileError> {
        let start = self.current_span();

        let expr = match self.peek().kind.clone() {
            TokenKind::Int(v) => {
                self.advance();
                Expr::Int(v)
            }
            TokenKind::Float(v) => {
                self.advance();
                Expr::Float(v)
            }
            TokenKind::Imaginary(v) => {
                self.advance();
                Expr::Imaginary(v)
            }
            TokenKind::Rune(c) => {
                self.advance();
                Expr::Rune(c)
            }
            TokenKind::String(s) => {
                self.advance();
                Expr::String(s)
            }
            TokenKind::Ident(name) => {
                self.advance();
                Expr::Ident(name)
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
                Expr::Paren(Box::new(inner))
            }
            TokenKind::Punctuation(PunctuationId::LBracket)
            | TokenKind::Keyword(
                KeywordId::Map | KeywordId::Chan | KeywordId::Func | KeywordId::Struct | KeywordId::Interface,
            ) => Expr::Type(self.type_expr()?),
            _ => return Err(self.unexpected("Expected expression")),
        };

        Ok(Spanned::new(expr, start.merge(self.previous_span())))
    }
}

fn binary_op(id: OperatorId) -> Option<BinaryOp> {
    let op = match id {
        OperatorId::Plus => BinaryOp::Add,
        OperatorId::Minus => BinaryOp::Sub,
        OperatorId::Star => BinaryOp::Mul,
        OperatorId::Slash => BinaryOp::Div,
        OperatorId::Percent => BinaryOp::Rem,
        OperatorId::Amp => BinaryOp::And,
        OperatorId::Pipe => BinaryOp::Or,
        OperatorId::Caret => BinaryOp::Xor,
        OperatorId::AndNot => BinaryOp::AndNot,
        OperatorId::Shl => BinaryOp::Shl,
        OperatorId::Shr => BinaryOp::Shr,
        OperatorId::AndAnd => BinaryOp::LogicalAnd,
        OperatorId::OrOr => BinaryOp::LogicalOr,
        OperatorId::EqEq => BinaryOp::Eq,
        OperatorId::NotEq => BinaryOp::NotEq,
        OperatorId::Lt => BinaryOp::Lt,
        OperatorId::LtEq => BinaryOp::LtEq,
        OperatorId::Gt => BinaryOp::Gt,
        OperatorId::GtEq => BinaryOp::GtEq,
        _ => return None,
    };
    Some(op)
}

fn unary_op(id: OperatorId) -> Option<UnaryOp> {
    match id {
        OperatorId::Plus => Some(UnaryOp::Plus),
        OperatorId::Minus => Some(UnaryOp::Neg),
        OperatorId::Caret => Some(UnaryOp::Complement),
        OperatorId::Not => Some(UnaryOp::Not),
        _ => None,
    }
}
