//! Lexer for the tern language
//!
//! Handles tokenization including:
//! - Keywords and word operators (`func`, `iterate`, `and`, `as`, etc.)
//! - Identifiers and literals (decimal/hex/binary numbers, double-quoted strings)
//! - Operators and punctuation, longest spelling first (`<<=`, `&^`, `=:`, `..`)
//! - Implicit `;` insertion at line ends
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::sync::Arc;

use crate::diagnostics::LexError;
use tern_core::lang::operators;
use tern_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Semicolon insertion (simplified):
//
// [token] → see '\n' → previous token ends a statement? → emit ';'
//                                 ↓ no
//                              skip newline
// ============================================================================

/// Symbol spellings, longest first, so that scanning takes the maximal munch.
const SYMBOLS: &[&str] = &[
    "<<=", ">>=", "&^=", "~+=", // three bytes
    "<<", ">>", "&^", "~+", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "=:", "..",
    "+", "-", "*", "/", "%", "&", "|", "^", "<", ">", "=", // one byte
    "(", ")", "[", "]", "{", "}", ".", ",", ":", ";", "!", "?", "$",
];

/// Lexer for tern source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Keywords, word operators and identifiers
/// - Numeric and string literals
/// - Operators and punctuation
/// - Go-style implicit semicolons
pub struct Lexer<'a> {
    filename: Arc<str>,
    source: &'a str,
    pos: usize,
    line: u32,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(filename: &str, source: &'a str) -> Self {
        Self {
            filename: Arc::from(filename),
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Stops at the first malformed token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.peek() {
            self.scan_token(c)?;
        }
        self.insert_semicolon();
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line));
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(self.filename.clone(), self.line, message)
    }

    /// Emit an implicit `;` if the previous token can end a statement.
    fn insert_semicolon(&mut self) {
        if self.tokens.last().is_some_and(|t| t.kind.ends_statement()) {
            self.push(TokenKind::Punctuation(PunctuationId::Semicolon));
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self, c: u8) -> Result<(), LexError> {
        match c {
            b'\n' => {
                self.insert_semicolon();
                self.pos += 1;
                self.line += 1;
            }
            b' ' | b'\t' | b'\r' => self.pos += 1,
            b'/' if self.peek_next() == Some(b'/') => {
                let len = self.rest().find('\n').unwrap_or(self.rest().len());
                self.pos += len;
            }
            b'"' => self.scan_string()?,
            b'0'..=b'9' => self.scan_number()?,
            c if c == b'_' || c.is_ascii_alphabetic() => self.scan_word(),
            _ => self.scan_symbol()?,
        }
        Ok(())
    }

    fn scan_word(&mut self) {
        let len = self
            .rest()
            .bytes()
            .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
            .count();
        let word = &self.rest()[..len];
        self.pos += len;
        self.push(tokens::classify_word(word));
    }

    /// Numbers keep their spelling; only the digit alphabet is checked here.
    fn scan_number(&mut self) -> Result<(), LexError> {
        let len = self
            .rest()
            .bytes()
            .take_while(|b| *b == b'_' || b.is_ascii_alphanumeric())
            .count();
        let spelling = &self.rest()[..len];
        let (prefix, digits, radix) = match spelling.get(..2) {
            Some("0x" | "0X") => (2, &spelling[2..], 16),
            Some("0b" | "0B") => (2, &spelling[2..], 2),
            _ => (0, spelling, 10),
        };
        let well_formed = digits.bytes().any(|b| b != b'_')
            && digits.chars().all(|c| c == '_' || c.is_digit(radix))
            && (prefix > 0 || !digits.ends_with('_'));
        if !well_formed {
            return Err(self.error(format!("malformed number literal {spelling:?}")));
        }
        self.pos += len;
        self.push(TokenKind::Number(spelling.to_string()));
        Ok(())
    }

    /// Strings keep their quotes and escapes; unescaping happens where the value is needed.
    fn scan_string(&mut self) -> Result<(), LexError> {
        let bytes = self.rest().as_bytes();
        let mut i = 1;
        loop {
            match bytes.get(i) {
                None | Some(b'\n') => return Err(self.error("unterminated string literal")),
                Some(b'\\') => i += 2,
                Some(b'"') => break,
                Some(_) => i += 1,
            }
        }
        let spelling = &self.rest()[..=i];
        self.pos += i + 1;
        self.push(TokenKind::Str(spelling.to_string()));
        Ok(())
    }

    fn scan_symbol(&mut self) -> Result<(), LexError> {
        let rest = self.rest();
        let Some(spelling) = SYMBOLS.iter().copied().find(|s| rest.starts_with(s)) else {
            let c = rest.chars().next().unwrap_or('\0');
            return Err(self.error(format!("unexpected character {c:?}")));
        };
        let kind = if let Some(id) = operators::from_str(spelling) {
            TokenKind::Operator(id)
        } else if let Some(id) = punctuation::from_str(spelling) {
            TokenKind::Punctuation(id)
        } else {
            return Err(self.error(format!("unknown symbol {spelling:?}")));
        };
        self.pos += spelling.len();
        self.push(kind);
        Ok(())
    }
}

/// Tokenize `source`, attributing positions to `filename`.
#[tracing::instrument(skip_all, fields(filename = filename, source_len = source.len()))]
pub fn lex(filename: &str, source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(filename, source).tokenize()?;
    tracing::trace!(token_count = tokens.len(), "lexed");
    Ok(tokens)
}
