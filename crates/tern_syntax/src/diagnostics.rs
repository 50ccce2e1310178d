//! Diagnostics for the tern front end.
//!
//! The parser is fail-fast: the first problem aborts the parse and is reported as a single
//! [`SyntaxError`]. Lexing problems are reported as [`LexError`]. Both carry the filename and line and
//! implement [`miette::Diagnostic`] so tools can render them with source context.

use std::fmt;
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

/// Category of a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Expected a specific token or category, got another.
    UnexpectedToken,
    /// The token stream ran out where a token was required.
    UnexpectedEof,
    /// Invalid package id, bad string escape, or an iterate count that is not a power of two in 1..=256.
    MalformedLiteral,
    /// A built-in or double-underscore name used where a new declaration name is introduced.
    IllegalName,
    /// A bare `assert` inside an assertion chain, or a `pre`/`inv`/`post` step backwards.
    AssertionOrder,
    /// The expression after `try` is not a call.
    MalformedTry,
    /// The operator registry lacks a node form for an operator token.
    Internal,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            SyntaxErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            SyntaxErrorKind::MalformedLiteral => write!(f, "malformed literal"),
            SyntaxErrorKind::IllegalName => write!(f, "illegal name"),
            SyntaxErrorKind::AssertionOrder => write!(f, "assertion order"),
            SyntaxErrorKind::MalformedTry => write!(f, "malformed try"),
            SyntaxErrorKind::Internal => write!(f, "internal error"),
        }
    }
}

/// A located, fatal parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("parse: {message} at {filename}:{line}")]
#[diagnostic(code(tern::syntax))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub filename: Arc<str>,
    pub line: u32,
    pub message: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, filename: Arc<str>, line: u32, message: impl Into<String>) -> Self {
        Self {
            kind,
            filename,
            line,
            message: message.into(),
        }
    }
}

/// A located lexing error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("lex: {message} at {filename}:{line}")]
#[diagnostic(code(tern::lex))]
pub struct LexError {
    pub filename: Arc<str>,
    pub line: u32,
    pub message: String,
}

impl LexError {
    pub fn new(filename: Arc<str>, line: u32, message: impl Into<String>) -> Self {
        Self {
            filename,
            line,
            message: message.into(),
        }
    }
}

/// Any failure of the source-to-AST pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}
