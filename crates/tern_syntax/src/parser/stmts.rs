/// Statement parsing methods.
///
/// This chunk parses blocks and statements: assertions, jumps, `io_bind`, `if`/`else if`, `iterate`,
/// `return`/`yield`, `var`, `while`, and the expression/assignment fallback.
///
/// ## Notes
/// - Every statement is stamped with the location of its leading token after it is built. For
///   `iterate`, each induction variable receives the same stamp.
/// - Statements in a block are separated by (usually implicit) `;`; the last one may omit it before `}`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Block, SyntaxError> {
        self.expect_punct(PunctuationId::LBrace)?;
        let mut body = Vec::new();
        loop {
            if self.match_punct(PunctuationId::RBrace) {
                return Ok(body);
            }
            if self.is_at_end() {
                return Err(self.unexpected(r#""}""#));
            }
            body.push(self.statement()?);
            if !self.check_punct(PunctuationId::RBrace) {
                self.expect_semicolon()?;
            }
        }
    }

    fn statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let pos = self.here();
        let mut stmt = self.statement_kind()?;
        if let Statement::Iterate(iterate) = &mut stmt {
            for var in &mut iterate.vars {
                var.pos = pos.clone();
            }
        }
        Ok(Spanned::new(stmt, pos))
    }

    fn statement_kind(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek_kind().and_then(TokenKind::keyword_id) {
            Some(KeywordId::Assert | KeywordId::Pre | KeywordId::Inv | KeywordId::Post) => {
                Ok(Statement::Assert(self.assertion()?.node))
            }
            Some(id @ (KeywordId::Break | KeywordId::Continue)) => {
                self.advance();
                let kind = if id == KeywordId::Break {
                    JumpKind::Break
                } else {
                    JumpKind::Continue
                };
                let label = self.label()?;
                Ok(Statement::Jump(JumpStmt { kind, label }))
            }
            Some(KeywordId::IoBind) => {
                self.advance();
                let bindings = self.list(PunctuationId::RParen, Self::io_binding)?;
                let body = self.block()?;
                Ok(Statement::IoBind(IoBindStmt { bindings, body }))
            }
            Some(KeywordId::If) => Ok(Statement::If(self.if_stmt()?)),
            Some(KeywordId::Iterate) => {
                self.advance();
                let label = self.label()?;
                let vars = self.list(PunctuationId::RParen, Self::iterate_var)?;
                Ok(Statement::Iterate(self.iterate_block(label, vars)?))
            }
            Some(id @ (KeywordId::Return | KeywordId::Yield)) => {
                self.advance();
                let kind = if id == KeywordId::Return {
                    RetKind::Return
                } else {
                    RetKind::Yield
                };
                let value = if self.is_at_end()
                    || self.check_punct(PunctuationId::Semicolon)
                    || self.check_punct(PunctuationId::RBrace)
                {
                    None
                } else {
                    Some(self.expr()?)
                };
                Ok(Statement::Ret(RetStmt { kind, value }))
            }
            Some(KeywordId::Var) => {
                self.advance();
                Ok(Statement::Var(self.var(false)?))
            }
            Some(KeywordId::While) => {
                self.advance();
                let label = self.label()?;
                let condition = self.expr()?;
                let asserts = self.assert_chain()?;
                let body = self.block()?;
                Ok(Statement::While(WhileStmt {
                    label,
                    condition,
                    asserts,
                    body,
                }))
            }
            _ => self.assign_or_expr(),
        }
    }

    /// Fallback: an expression, optionally followed by an assignment operator and a right-hand side.
    fn assign_or_expr(&mut self) -> Result<Statement, SyntaxError> {
        let lhs = self.expr()?;
        let assign = self
            .peek_kind()
            .filter(|k| k.is_assign_op())
            .and_then(TokenKind::operator_id);
        let Some(id) = assign else {
            return Ok(Statement::Expr(lhs));
        };
        let op = operators::assign_form(id).ok_or_else(|| self.missing_form("assignment", id))?;
        self.advance();
        let rhs = self.expr()?;
        Ok(Statement::Assign(AssignStmt { lhs, op, rhs }))
    }

    fn if_stmt(&mut self) -> Result<IfStmt, SyntaxError> {
        self.expect_keyword(KeywordId::If)?;
        let condition = self.expr()?;
        let then_body = self.block()?;
        let else_branch = if self.match_keyword(KeywordId::Else) {
            if self.check_keyword(KeywordId::If) {
                let pos = self.here();
                Some(ElseBranch::If(Box::new(Spanned::new(self.if_stmt()?, pos))))
            } else {
                Some(ElseBranch::Block(self.block()?))
            }
        } else {
            None
        };
        Ok(IfStmt {
            condition,
            then_body,
            else_branch,
        })
    }

    /// Parse `(length: N, unroll: M) [, asserts] { body } [else iterate-block]` after the variables.
    fn iterate_block(&mut self, label: Option<Ident>, vars: Vec<Spanned<VarStmt>>) -> Result<IterateStmt, SyntaxError> {
        self.expect_punct(PunctuationId::LParen)?;
        self.expect_word(builtins::LENGTH)?;
        self.expect_punct(PunctuationId::Colon)?;
        let length = self.iterate_count(builtins::LENGTH)?;
        self.expect_punct(PunctuationId::Comma)?;
        self.expect_word(builtins::UNROLL)?;
        self.expect_punct(PunctuationId::Colon)?;
        let unroll = self.iterate_count(builtins::UNROLL)?;
        self.expect_punct(PunctuationId::RParen)?;

        let asserts = self.assert_chain()?;
        let body = self.block()?;

        // The tail loop takes no label and no variables.
        let else_pos = self.here();
        let else_iterate = if self.match_keyword(KeywordId::Else) {
            let tail = self.iterate_block(None, Vec::new())?;
            Some(Box::new(Spanned::new(tail, else_pos)))
        } else {
            None
        };

        Ok(IterateStmt {
            label,
            vars,
            length,
            unroll,
            asserts,
            body,
            else_iterate,
        })
    }

    /// A numeric literal that is a power of two in `1..=256`.
    fn iterate_count(&mut self, what: &str) -> Result<u32, SyntaxError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected(&format!("power-of-2 {what} count")));
        };
        let value = match &token.kind {
            TokenKind::Number(spelling) => literals::small_power_of_2(spelling),
            _ => None,
        };
        let Some(value) = value else {
            return Err(self.error_at(
                SyntaxErrorKind::MalformedLiteral,
                token.line,
                format!("expected power-of-2 {what} count in [1..256], got {:?}", token.to_string()),
            ));
        };
        self.advance();
        Ok(value)
    }

    /// One `io_bind` target: a bare identifier or a selector rooted at `in`.
    fn io_binding(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let expr = self.expr()?;
        let legal = match &expr.node {
            Expr::Ident(_) => true,
            Expr::Selector(receiver, _) => receiver.node.as_ident() == Some(builtins::IN),
            _ => false,
        };
        if !legal {
            return Err(self.error_at(
                SyntaxErrorKind::UnexpectedToken,
                expr.line(),
                format!(r#"expected "in.something", got {:?}"#, expr.to_string()),
            ));
        }
        Ok(expr)
    }

    fn iterate_var(&mut self) -> Result<Spanned<VarStmt>, SyntaxError> {
        let pos = self.here();
        Ok(Spanned::new(self.var(true)?, pos))
    }

    /// `name type [= value | = try call]`, or `name type =: value` inside an iterate variable list.
    fn var(&mut self, in_iterate: bool) -> Result<VarStmt, SyntaxError> {
        let name = self.identifier()?;
        let ty = self.type_expr()?;
        let init = if in_iterate {
            self.expect_punct(PunctuationId::EqColon)?;
            Some(VarInit::Bind(self.expr()?))
        } else if self.match_op(OperatorId::Eq) {
            let value = if self.check_keyword(KeywordId::Try) {
                self.try_expr()?
            } else {
                self.expr()?
            };
            Some(VarInit::Assign(value))
        } else {
            None
        };
        Ok(VarStmt { name, ty, init })
    }

    /// Optional `:label` after `break`, `continue`, `iterate` and `while`.
    fn label(&mut self) -> Result<Option<Ident>, SyntaxError> {
        if self.match_punct(PunctuationId::Colon) {
            Ok(Some(self.identifier()?))
        } else {
            Ok(None)
        }
    }
}
