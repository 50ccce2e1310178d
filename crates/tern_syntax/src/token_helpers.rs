//! Token classification used by the lexer and parser.
//!
//! Keyword, operator and punctuation identity come from the `tern_core::lang` registries; the parser asks
//! these questions through `TokenKind` rather than matching variants at each call site.

use crate::lexer::TokenKind;
use tern_core::lang::keywords::{self, KeywordId};
use tern_core::lang::operators::{self, OperatorId};
use tern_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this is the identifier spelled `name`.
    pub fn is_ident_named(&self, name: &str) -> bool {
        matches!(self, TokenKind::Ident(s) if s == name)
    }

    /// Raw spelling of a string literal token, quotes and escapes included.
    pub fn str_literal(&self) -> Option<&str> {
        match self {
            TokenKind::Str(raw) => Some(raw),
            _ => None,
        }
    }

    /// Return `true` for operators that may prefix an operand (`+`, `-`, `not`).
    pub fn is_unary_op(&self) -> bool {
        self.operator_id().is_some_and(operators::is_unary_op)
    }

    /// Return `true` for `=` and the compound assignment operators.
    pub fn is_assign_op(&self) -> bool {
        self.operator_id().is_some_and(operators::is_assign_op)
    }

    /// Return `true` if a newline after this token ends the statement (implicit `;`).
    pub fn ends_statement(&self) -> bool {
        match self {
            TokenKind::Ident(_) | TokenKind::Number(_) | TokenKind::Str(_) => true,
            TokenKind::Keyword(id) => keywords::info_for(*id).ends_statement,
            TokenKind::Punctuation(p) => {
                matches!(p, PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)
            }
            TokenKind::Operator(_) => false,
        }
    }
}
