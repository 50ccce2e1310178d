/// Type-expression parsing methods.
///
/// This chunk parses syntactic type expressions, including:
/// - Pointer decorators (`ptr T`, `nptr T`), nesting arbitrarily
/// - Container decorators (`array[N] T`, `slice T`, `table T`)
/// - Possibly package-qualified names (`u32`, `base.io_reader`)
/// - Refinements on names (`u32[0..255]`, `u8[..9]`)
///
/// It also holds the shared `[...]` bracket parser used by index and slice expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<TypeExpr>, SyntaxError> {
        let pos = self.here();
        let ty = match self.peek_kind().and_then(TokenKind::keyword_id) {
            Some(KeywordId::Ptr) => {
                self.advance();
                TypeExpr::Pointer(Box::new(self.type_expr()?))
            }
            Some(KeywordId::Nptr) => {
                self.advance();
                TypeExpr::NullablePointer(Box::new(self.type_expr()?))
            }
            Some(KeywordId::Array) => {
                self.advance();
                self.expect_punct(PunctuationId::LBracket)?;
                let length = self.expr()?;
                self.expect_punct(PunctuationId::RBracket)?;
                TypeExpr::Array {
                    length: Box::new(length),
                    inner: Box::new(self.type_expr()?),
                }
            }
            Some(KeywordId::Slice) => {
                self.advance();
                TypeExpr::Slice(Box::new(self.type_expr()?))
            }
            Some(KeywordId::Table) => {
                self.advance();
                TypeExpr::Table(Box::new(self.type_expr()?))
            }
            _ => {
                let (package, name) = self.qualified_ident()?;
                let refinement = if self.check_punct(PunctuationId::LBracket) {
                    match self.bracket(PunctuationId::DotDot)? {
                        Bracket::Range { low, high } => Some(Refinement { low, high }),
                        Bracket::Index(_) => {
                            return Err(self.error_at(
                                SyntaxErrorKind::Internal,
                                pos.line,
                                "internal error: index form in type refinement",
                            ));
                        }
                    }
                } else {
                    None
                };
                TypeExpr::Named {
                    package,
                    name,
                    refinement,
                }
            }
        };
        Ok(Spanned::new(ty, pos))
    }

    /// Parse `[i:j]`, `[i:]`, `[:j]` and `[:]` with `sep` between the bounds.
    ///
    /// ## Notes
    /// - Only with `sep = :` is a bare `[x]` accepted, producing [`Bracket::Index`].
    /// - Type refinements pass `..`, so `u32[5]` is rejected there.
    fn bracket(&mut self, sep: PunctuationId) -> Result<Bracket, SyntaxError> {
        self.expect_punct(PunctuationId::LBracket)?;

        let low = if self.check_punct(sep) {
            None
        } else {
            Some(Box::new(self.expr()?))
        };

        match low {
            Some(index) if sep == PunctuationId::Colon && self.check_punct(PunctuationId::RBracket) => {
                self.advance();
                Ok(Bracket::Index(index))
            }
            low => {
                if !self.match_punct(sep) {
                    let expected = if sep == PunctuationId::Colon {
                        r#"":" or "]""#.to_string()
                    } else {
                        quoted(punctuation::as_str(sep))
                    };
                    return Err(self.unexpected(&expected));
                }
                let high = if self.check_punct(PunctuationId::RBracket) {
                    None
                } else {
                    Some(Box::new(self.expr()?))
                };
                self.expect_punct(PunctuationId::RBracket)?;
                Ok(Bracket::Range { low, high })
            }
        }
    }
}
