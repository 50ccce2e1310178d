//! Token types for the tern lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including word-operators like `and` and `as`)
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Identifiers and literals keep their source spelling; string literals keep their quotes and escapes
//!   so they render back exactly as written.
//! - Use `crate::token_helpers` for classification at call sites.

use std::fmt;

use tern_core::lang::keywords::{self, KeywordId};
use tern_core::lang::operators::{self, OperatorId};
use tern_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    Ident(String),
    /// Numeric literal as written (`42`, `0xFF`, `1_000`).
    Number(String),
    /// String literal as written, quotes included.
    Str(String),
}

/// A token with its kind and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for TokenKind {
    /// Render the token back to its source spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident(s) | TokenKind::Number(s) | TokenKind::Str(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// Resolve a word spelling to its token kind: word operator, keyword, or identifier.
pub fn classify_word(spelling: &str) -> TokenKind {
    if let Some(id) = operators::from_str(spelling).filter(|id| operators::info_for(*id).is_keyword_spelling) {
        TokenKind::Operator(id)
    } else if let Some(id) = keywords::from_str(spelling) {
        TokenKind::Keyword(id)
    } else {
        TokenKind::Ident(spelling.to_string())
    }
}
