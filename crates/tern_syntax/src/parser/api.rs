/// Parse a token stream into a [`File`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `filename`: Name recorded on every node and error.
/// - `tokens`: Token stream, e.g. produced by `tern_syntax::lexer`.
/// - `options`: Name-legality switches.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered.
#[tracing::instrument(skip_all, fields(filename = filename, token_count = tokens.len()))]
pub fn parse(filename: &str, tokens: &[Token], options: &ParseOptions) -> Result<File, SyntaxError> {
    Parser::new(filename, tokens, options).parse_file()
}

/// Parse a token stream that holds exactly one expression.
#[tracing::instrument(skip_all, fields(filename = filename, token_count = tokens.len()))]
pub fn parse_expr(filename: &str, tokens: &[Token], options: &ParseOptions) -> Result<Spanned<Expr>, SyntaxError> {
    Parser::new(filename, tokens, options).parse_expression()
}

/// Lex and parse `source` in one step.
pub fn parse_source(filename: &str, source: &str, options: &ParseOptions) -> Result<File, FrontendError> {
    let tokens = lexer::lex(filename, source)?;
    Ok(parse(filename, &tokens, options)?)
}
