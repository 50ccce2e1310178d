/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Building located errors (`unexpected`, `error_at`)
/// - The comma-separated list driver (`list`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Line of the current token, or of the last token once the stream is exhausted.
    fn line(&self) -> u32 {
        self.peek().map_or(self.last_line, |t| t.line)
    }

    /// Location of the current token, for stamping the node that starts here.
    fn here(&self) -> Pos {
        Pos::new(self.filename.clone(), self.line())
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_keyword(id))
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_punctuation(id))
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_operator(id))
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

    fn expect_keyword(&mut self, id: KeywordId) -> Result<(), SyntaxError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.unexpected(&quoted(keywords::as_str(id))))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<(), SyntaxError> {
        if self.match_punct(id) {
            Ok(())
        } else {
            Err(self.unexpected(&quoted(punctuation::as_str(id))))
        }
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<(), SyntaxError> {
        if self.match_op(id) {
            Ok(())
        } else {
            Err(self.unexpected(&quoted(operators::as_str(id))))
        }
    }

    /// Expect the identifier spelled `word`, used for contextual words like `length`.
    fn expect_word(&mut self, word: &str) -> Result<(), SyntaxError> {
        if self.peek_kind().is_some_and(|k| k.is_ident_named(word)) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&quoted(word)))
        }
    }

    /// Expect the statement/declaration terminator, usually inserted by the lexer at a line end.
    fn expect_semicolon(&mut self) -> Result<(), SyntaxError> {
        if self.match_punct(PunctuationId::Semicolon) {
            Ok(())
        } else {
            Err(self.unexpected(r#"(implicit) ";""#))
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Build an "expected X, got Y" error at the current token.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => self.error_at(
                SyntaxErrorKind::UnexpectedToken,
                token.line,
                format!("expected {expected}, got {:?}", token.to_string()),
            ),
            None => self.error_at(
                SyntaxErrorKind::UnexpectedEof,
                self.last_line,
                format!("expected {expected}, got end of input"),
            ),
        }
    }

    fn error_at(&self, kind: SyntaxErrorKind, line: u32, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(kind, self.filename.clone(), line, message)
    }

    /// Report an operator whose registry entry lacks the node form the grammar asked for.
    fn missing_form(&self, form: &str, id: OperatorId) -> SyntaxError {
        self.error_at(
            SyntaxErrorKind::Internal,
            self.line(),
            format!("internal error: no {form} form for operator {:?}", operators::as_str(id)),
        )
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// Parse a comma-separated list ending at `stop`; a trailing comma is allowed.
    ///
    /// ## Notes
    /// - With `stop = )` the list is parenthesized: the opening `(` is required and the `)` is consumed.
    /// - With any other stop (`{` for assertion chains) the stop token is left for the caller.
    fn list<T>(
        &mut self,
        stop: PunctuationId,
        mut elem: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<Vec<T>, SyntaxError> {
        let parenthesized = stop == PunctuationId::RParen;
        if parenthesized {
            self.expect_punct(PunctuationId::LParen)?;
        }

        let mut items = Vec::new();
        loop {
            if self.check_punct(stop) {
                break;
            }
            if self.is_at_end() {
                return Err(self.unexpected(&quoted(punctuation::as_str(stop))));
            }
            items.push(elem(self)?);
            if self.check_punct(stop) {
                break;
            }
            if !self.match_punct(PunctuationId::Comma) {
                return Err(self.unexpected(&quoted(punctuation::as_str(stop))));
            }
        }

        if parenthesized {
            self.advance();
        }
        Ok(items)
    }
}

/// Render a spelling the way diagnostics quote it: `(` becomes `"("`.
fn quoted(spelling: &str) -> String {
    format!("{spelling:?}")
}
