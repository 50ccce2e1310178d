/// Parser core types and entrypoints.
///
/// This chunk defines the [`Parser`] type, its [`ParseOptions`], and the two top-level drivers
/// (`parse_file` and `parse_expression`). It also contains a small internal helper type shared across
/// the other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Result of parsing `[...]` syntax: either a single index or a range with optional bounds.
enum Bracket {
    Index(Box<Spanned<Expr>>),
    Range {
        low: Option<Box<Spanned<Expr>>>,
        high: Option<Box<Spanned<Expr>>>,
    },
}

/// Name-legality switches for declaration positions.
///
/// Both default to `false`: built-in and double-underscore names cannot be declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Allow built-in names (`u32`, `in`, `length`, ...) as func, receiver, struct and const names.
    pub allow_builtin_names: bool,
    /// Allow names starting with `__` as func, struct and const names.
    pub allow_double_underscore_names: bool,
}

impl ParseOptions {
    pub fn with_builtin_names(mut self, allow: bool) -> Self {
        self.allow_builtin_names = allow;
        self
    }

    pub fn with_double_underscore_names(mut self, allow: bool) -> Self {
        self.allow_double_underscore_names = allow;
        self
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first error aborts the parse.
/// - The cursor only moves forward; at most one token is inspected ahead of it.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    filename: Arc<str>,
    options: ParseOptions,
    /// Line reported once the stream is exhausted.
    last_line: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `filename`: Name stamped on every node and error.
    /// - `tokens`: Token stream, e.g. produced by `tern_syntax::lexer`.
    /// - `options`: Name-legality switches.
    pub fn new(filename: &str, tokens: &'a [Token], options: &ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            filename: Arc::from(filename),
            options: *options,
            last_line: tokens.last().map_or(1, |t| t.line),
        }
    }

    /// Parse the entire token stream into a [`File`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered; no partial tree is produced.
    pub fn parse_file(mut self) -> Result<File, SyntaxError> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            declarations.push(self.declaration()?);
        }
        Ok(File {
            filename: self.filename,
            declarations,
        })
    }

    /// Parse the entire token stream as one expression.
    ///
    /// A single trailing `;` (as inserted by the lexer at end of input) is accepted.
    pub fn parse_expression(mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let expr = self.expr()?;
        self.match_punct(PunctuationId::Semicolon);
        if !self.is_at_end() {
            return Err(self.unexpected("end of expression"));
        }
        Ok(expr)
    }
}
