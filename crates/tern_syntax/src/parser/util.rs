/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt”, “expr”, or “types” (identifier parsing, string literals and name legality).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, SyntaxError> {
        match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                self.advance();
                Ok(name.clone())
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Parse `foo.bar` or `bar`, returning the optional qualifier and the name.
    fn qualified_ident(&mut self) -> Result<(Option<Ident>, Ident), SyntaxError> {
        let first = self.identifier()?;
        if !self.match_punct(PunctuationId::Dot) {
            return Ok((None, first));
        }
        let second = self.identifier()?;
        Ok((Some(first), second))
    }

    /// Parse a string literal token and return its unescaped value.
    fn string_literal(&mut self) -> Result<String, SyntaxError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected("string literal"));
        };
        let Some(raw) = token.kind.str_literal() else {
            return Err(self.unexpected("string literal"));
        };
        let value = literals::unescape(raw).ok_or_else(|| {
            self.error_at(
                SyntaxErrorKind::MalformedLiteral,
                token.line,
                format!("invalid string literal {raw}"),
            )
        })?;
        self.advance();
        Ok(value)
    }

    /// Reject built-in and double-underscore names in a declaration position, unless allowed.
    fn check_decl_name(&self, name: &str, what: &str, line: u32) -> Result<(), SyntaxError> {
        let problem = if !self.options.allow_builtin_names && builtins::is_builtin(name) {
            "built-in"
        } else if !self.options.allow_double_underscore_names && builtins::is_double_underscore(name) {
            "double-underscore"
        } else {
            return Ok(());
        };
        Err(self.error_at(
            SyntaxErrorKind::IllegalName,
            line,
            format!("{problem} {name:?} used for {what}"),
        ))
    }
}
