/// Declaration parsing methods.
///
/// This chunk parses top-level declarations:
/// - `packageid "name"` and `use "path"`
/// - `pub`/`pri` flagged declarations: `const`, `func`, `error`/`suspension` statuses, `struct`
///
/// ## Notes
/// - Every declaration ends with a (usually implicit) `;`.
/// - Declared names are checked against [`ParseOptions`] before anything after them is parsed.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Spanned<Declaration>, SyntaxError> {
        let pos = self.here();
        let decl = match self.peek_kind().and_then(TokenKind::keyword_id) {
            Some(KeywordId::PackageId) => {
                self.advance();
                self.package_id(pos.line)?
            }
            Some(KeywordId::Use) => {
                self.advance();
                let path = self.string_literal()?;
                self.expect_semicolon()?;
                Declaration::Use(UseDecl { path })
            }
            Some(KeywordId::Pub) => {
                self.advance();
                self.flagged_declaration(Visibility::Public)?
            }
            Some(KeywordId::Pri) => {
                self.advance();
                self.flagged_declaration(Visibility::Private)?
            }
            _ => return Err(self.unexpected("top level declaration")),
        };
        tracing::trace!(line = pos.line, "parsed declaration");
        Ok(Spanned::new(decl, pos))
    }

    /// `packageid "name"`: the name must encode under the base-38 alphabet to a non-zero code.
    fn package_id(&mut self, line: u32) -> Result<Declaration, SyntaxError> {
        let Some(raw) = self.peek_kind().and_then(TokenKind::str_literal) else {
            return Err(self.unexpected("string literal"));
        };
        self.advance();
        self.expect_semicolon()?;

        let invalid = |what: &str| {
            self.error_at(
                SyntaxErrorKind::MalformedLiteral,
                line,
                format!("{what:?} is not a valid packageid"),
            )
        };
        let id = literals::unescape(raw).ok_or_else(|| invalid(raw))?;
        let code = base38::encode(&id).filter(|code| *code != 0).ok_or_else(|| invalid(&id))?;
        Ok(Declaration::PackageId(PackageIdDecl { id, code }))
    }

    fn flagged_declaration(&mut self, visibility: Visibility) -> Result<Declaration, SyntaxError> {
        match self.peek_kind().and_then(TokenKind::keyword_id) {
            Some(KeywordId::Const) => {
                self.advance();
                self.const_decl(visibility)
            }
            Some(KeywordId::Func) => {
                self.advance();
                self.func_decl(visibility)
            }
            Some(KeywordId::Error) => {
                self.advance();
                self.status_decl(visibility, StatusKeyword::Error)
            }
            Some(KeywordId::Suspension) => {
                self.advance();
                self.status_decl(visibility, StatusKeyword::Suspension)
            }
            Some(KeywordId::Struct) => {
                self.advance();
                self.struct_decl(visibility)
            }
            _ => Err(self.unexpected(r#""const", "func", "error", "suspension" or "struct""#)),
        }
    }

    /// `const NAME type = value`, where value may be a `$(...)` aggregate.
    fn const_decl(&mut self, visibility: Visibility) -> Result<Declaration, SyntaxError> {
        let line = self.line();
        let name = self.identifier()?;
        self.check_decl_name(&name, "const name", line)?;
        let ty = self.type_expr()?;
        self.expect_op(OperatorId::Eq)?;
        let value = self.possible_dollar_expr()?;
        self.expect_semicolon()?;
        Ok(Declaration::Const(ConstDecl {
            visibility,
            name,
            ty,
            value,
        }))
    }

    /// `func [recv.]name[!|?] (in) (out) [, asserts] { body }`
    fn func_decl(&mut self, visibility: Visibility) -> Result<Declaration, SyntaxError> {
        let line = self.line();
        let (receiver, name) = self.qualified_ident()?;
        let builtin_receiver = receiver.as_deref().filter(|r| builtins::is_builtin(r));
        if let (Some(receiver), false) = (builtin_receiver, self.options.allow_builtin_names) {
            return Err(self.error_at(
                SyntaxErrorKind::IllegalName,
                line,
                format!("built-in {receiver:?} used for func receiver"),
            ));
        }
        self.check_decl_name(&name, "func name", line)?;

        let effect = if self.match_punct(PunctuationId::Exclam) {
            Effect::Impure
        } else if self.match_punct(PunctuationId::Question) {
            Effect::Suspendible
        } else {
            Effect::Pure
        };

        let in_fields = self.list(PunctuationId::RParen, Self::field)?;
        let out_fields = self.list(PunctuationId::RParen, Self::field)?;
        let asserts = self.assert_chain()?;
        let body = self.block()?;
        self.expect_semicolon()?;

        Ok(Declaration::Func(FuncDecl {
            visibility,
            effect,
            receiver,
            name,
            in_fields,
            out_fields,
            asserts,
            body,
        }))
    }

    /// `error (value) "message"` / `suspension (value) "message"`
    fn status_decl(&mut self, visibility: Visibility, keyword: StatusKeyword) -> Result<Declaration, SyntaxError> {
        self.expect_punct(PunctuationId::LParen)?;
        let value = self.expr()?;
        self.expect_punct(PunctuationId::RParen)?;
        let message = self.string_literal()?;
        self.expect_semicolon()?;
        Ok(Declaration::Status(StatusDecl {
            visibility,
            keyword,
            value,
            message,
        }))
    }

    /// `struct name[?] (fields)`
    fn struct_decl(&mut self, visibility: Visibility) -> Result<Declaration, SyntaxError> {
        let line = self.line();
        let name = self.identifier()?;
        self.check_decl_name(&name, "struct name", line)?;
        let suspendible = self.match_punct(PunctuationId::Question);
        let fields = self.list(PunctuationId::RParen, Self::field)?;
        self.expect_semicolon()?;
        Ok(Declaration::Struct(StructDecl {
            visibility,
            suspendible,
            name,
            fields,
        }))
    }

    /// `name type`, one entry of a parameter list or struct body.
    fn field(&mut self) -> Result<Spanned<Field>, SyntaxError> {
        let pos = self.here();
        let name = self.identifier()?;
        let ty = self.type_expr()?;
        Ok(Spanned::new(Field { name, ty }, pos))
    }
}
