/// Expression parsing methods.
///
/// This chunk contains:
/// - Precedence climbing over binary operators (levels from the operator registry), with
///   same-operator flattening into associative nodes
/// - Operand parsing: unary prefixes, literals, parenthesized expressions, status literals
/// - Postfix chains: calls (with `!`/`?` effect markers), index/slice brackets, selectors
/// - `try` and `$(...)` expressions, and named call arguments
///
/// ## Notes
/// - Mixed operators fold left; `a + b - c` is `(a + b) - c`.
/// - Repeating the *same* associative operator at one level collects every operand into one
///   [`Expr::Associative`] node: `a + b + c` has three operands.
/// - The right-hand side of `as` is a type expression.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.binary_expr(1)
    }

    /// Parse operators binding at `level` or tighter.
    fn binary_expr(&mut self, level: u8) -> Result<Spanned<Expr>, SyntaxError> {
        if level > operators::MAX_PRECEDENCE {
            return self.operand();
        }

        let mut lhs = self.binary_expr(level + 1)?;
        while let Some(id) = self.peek_binary_op(level) {
            self.advance();
            let pos = lhs.pos.clone();

            if id == OperatorId::As {
                let ty = self.type_expr()?;
                lhs = Spanned::new(Expr::Cast(Box::new(lhs), Box::new(ty)), pos);
                continue;
            }

            let rhs = self.binary_expr(level + 1)?;
            lhs = if operators::is_associative_op(id) && self.check_op(id) {
                let mut operands = vec![lhs, rhs];
                while self.match_op(id) {
                    operands.push(self.binary_expr(level + 1)?);
                }
                let op = operators::associative_form(id).ok_or_else(|| self.missing_form("associative", id))?;
                tracing::trace!(operator = operators::as_str(id), operands = operands.len(), "flattened associative chain");
                Spanned::new(Expr::Associative(op, operands), pos)
            } else {
                let op = operators::binary_form(id).ok_or_else(|| self.missing_form("binary", id))?;
                Spanned::new(Expr::Binary(Box::new(lhs), op, Box::new(rhs)), pos)
            };
        }
        Ok(lhs)
    }

    /// The current token, if it is a binary operator at exactly `level`.
    fn peek_binary_op(&self, level: u8) -> Option<OperatorId> {
        let id = self.peek_kind()?.operator_id()?;
        (operators::precedence(id) == Some(level)).then_some(id)
    }

    fn operand(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let pos = self.here();
        let Some(token) = self.peek() else {
            return Err(self.unexpected("expression"));
        };

        let expr = match &token.kind {
            TokenKind::Operator(id) if token.kind.is_unary_op() => {
                let id = *id;
                self.advance();
                let operand = self.operand()?;
                let op = operators::unary_form(id).ok_or_else(|| self.missing_form("unary", id))?;
                Expr::Unary(op, Box::new(operand))
            }
            TokenKind::Number(spelling) => {
                self.advance();
                Expr::Literal(Literal::Number(spelling.clone()))
            }
            TokenKind::Str(_) => Expr::Literal(Literal::Str(self.string_literal()?)),
            TokenKind::Keyword(KeywordId::True) => {
                self.advance();
                Expr::Literal(Literal::Bool(true))
            }
            TokenKind::Keyword(KeywordId::False) => {
                self.advance();
                Expr::Literal(Literal::Bool(false))
            }
            TokenKind::Keyword(KeywordId::Nullptr) => {
                self.advance();
                Expr::Literal(Literal::Nullptr)
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expr()?;
                self.expect_punct(PunctuationId::RParen)?;
                return Ok(inner);
            }
            TokenKind::Keyword(id @ (KeywordId::Error | KeywordId::Status | KeywordId::Suspension)) => {
                let keyword = match id {
                    KeywordId::Error => StatusKeyword::Error,
                    KeywordId::Status => StatusKeyword::Status,
                    _ => StatusKeyword::Suspension,
                };
                self.advance();
                Expr::Status(keyword, self.string_literal()?)
            }
            _ => {
                let name = self.identifier()?;
                return self.postfix(Spanned::new(Expr::Ident(name), pos));
            }
        };
        Ok(Spanned::new(expr, pos))
    }

    /// Apply calls, brackets and selectors left to right.
    fn postfix(&mut self, mut lhs: Spanned<Expr>) -> Result<Spanned<Expr>, SyntaxError> {
        loop {
            let pos = lhs.pos.clone();
            let effect = if self.match_punct(PunctuationId::Exclam) {
                Effect::Impure
            } else if self.match_punct(PunctuationId::Question) {
                Effect::Suspendible
            } else {
                Effect::Pure
            };

            let expr = if effect != Effect::Pure || self.check_punct(PunctuationId::LParen) {
                let args = self.list(PunctuationId::RParen, Self::arg)?;
                Expr::Call(CallExpr {
                    callee: Box::new(lhs),
                    effect,
                    args,
                })
            } else if self.check_punct(PunctuationId::LBracket) {
                match self.bracket(PunctuationId::Colon)? {
                    Bracket::Index(index) => Expr::Index(Box::new(lhs), index),
                    Bracket::Range { low, high } => Expr::Slice {
                        receiver: Box::new(lhs),
                        low,
                        high,
                    },
                }
            } else if self.match_punct(PunctuationId::Dot) {
                let field = self.identifier()?;
                Expr::Selector(Box::new(lhs), field)
            } else {
                return Ok(lhs);
            };
            lhs = Spanned::new(expr, pos);
        }
    }

    /// `try call(...)`: the wrapped expression must be a call.
    fn try_expr(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let pos = self.here();
        self.expect_keyword(KeywordId::Try)?;
        let Spanned { node, pos: call_pos } = self.expr()?;
        match node {
            Expr::Call(call) => Ok(Spanned::new(Expr::Try(call), pos)),
            other => Err(self.error_at(
                SyntaxErrorKind::MalformedTry,
                call_pos.line,
                format!(r#"expected function call after "try", got {:?}"#, other.to_string()),
            )),
        }
    }

    /// An ordinary expression, or `$(...)` whose elements are themselves possibly-dollar expressions.
    fn possible_dollar_expr(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        if !self.check_punct(PunctuationId::Dollar) {
            return self.expr();
        }
        let pos = self.here();
        self.advance();
        let elements = self.list(PunctuationId::RParen, Self::possible_dollar_expr)?;
        Ok(Spanned::new(Expr::Dollar(elements), pos))
    }

    /// `name: value`, one named argument of a call or `via` clause.
    fn arg(&mut self) -> Result<Spanned<Arg>, SyntaxError> {
        let pos = self.here();
        let name = self.identifier()?;
        self.expect_punct(PunctuationId::Colon)?;
        let value = self.expr()?;
        Ok(Spanned::new(Arg { name, value }, pos))
    }
}
