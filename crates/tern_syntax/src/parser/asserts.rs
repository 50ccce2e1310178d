/// Assertion parsing and chain validation.
///
/// A single assertion is `assert|pre|inv|post condition [via "reason"(args)]`. A chain is the
/// comma-introduced assertion list attached to a func, `while` or `iterate`; it must run through
/// `pre`, then `inv`, then `post`, and never contains a bare `assert`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Assertions
    // ========================================================================

    fn assertion(&mut self) -> Result<Spanned<Assert>, SyntaxError> {
        let pos = self.here();
        let keyword = match self.peek_kind().and_then(TokenKind::keyword_id) {
            Some(KeywordId::Assert) => AssertKeyword::Assert,
            Some(KeywordId::Pre) => AssertKeyword::Pre,
            Some(KeywordId::Inv) => AssertKeyword::Inv,
            Some(KeywordId::Post) => AssertKeyword::Post,
            _ => return Err(self.unexpected(r#""assert", "pre", "inv" or "post""#)),
        };
        self.advance();
        let condition = self.expr()?;

        let (reason, args) = if self.match_keyword(KeywordId::Via) {
            let reason = self.string_literal()?;
            let args = self.list(PunctuationId::RParen, Self::arg)?;
            (Some(reason), args)
        } else {
            (None, Vec::new())
        };

        Ok(Spanned::new(
            Assert {
                keyword,
                condition,
                reason,
                args,
            },
            pos,
        ))
    }

    /// Parse an optional `, assertion, ...` chain up to (not including) the `{` of the body.
    ///
    /// The chain is validated before the body is parsed.
    fn assert_chain(&mut self) -> Result<Vec<Spanned<Assert>>, SyntaxError> {
        if !self.match_punct(PunctuationId::Comma) {
            return Ok(Vec::new());
        }
        let asserts = self.list(PunctuationId::LBrace, Self::assertion)?;
        validate_assert_chain(&asserts)?;
        Ok(asserts)
    }
}

/// Check that an assertion chain runs `pre*`, `inv*`, `post*` with no bare `assert`.
///
/// ## Errors
/// Returns an [`SyntaxErrorKind::AssertionOrder`] error located at the first offending assertion.
pub fn validate_assert_chain(asserts: &[Spanned<Assert>]) -> Result<(), SyntaxError> {
    let mut highest = AssertKeyword::Pre;
    for assert in asserts {
        let keyword = assert.node.keyword;
        let message = if keyword == AssertKeyword::Assert {
            r#"assertion chain cannot contain "assert", only "pre", "inv" and "post""#
        } else if keyword < highest {
            r#"assertion chain not in "pre", "inv", "post" order"#
        } else {
            highest = keyword;
            continue;
        };
        return Err(SyntaxError::new(
            SyntaxErrorKind::AssertionOrder,
            assert.pos.filename.clone(),
            assert.line(),
            message,
        ));
    }
    Ok(())
}
