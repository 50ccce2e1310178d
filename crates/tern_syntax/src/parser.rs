//! Parser for the tern language
//!
//! Converts a token stream into an AST. The parser is a single-pass recursive descent with one token of
//! lookahead and no backtracking. Declarations drive type expressions and statements; statements drive
//! expressions and assertion chains; `as` casts send expressions back into type expressions.
//!
//! ## Examples
//!
//! ```rust
//! use tern_syntax::{ast, lexer, parser};
//!
//! let tokens = lexer::lex("demo.tern", "a + b + c").unwrap();
//! let expr = parser::parse_expr("demo.tern", &tokens, &parser::ParseOptions::default()).unwrap();
//! assert!(matches!(expr.node, ast::Expr::Associative(ast::AssociativeOp::Add, ref operands) if operands.len() == 3));
//! ```

use std::sync::Arc;

use crate::ast::*;
use crate::diagnostics::{FrontendError, SyntaxError, SyntaxErrorKind};
use crate::lexer::{self, Token, TokenKind};
use tern_core::lang::base38;
use tern_core::lang::builtins;
use tern_core::lang::keywords::{self, KeywordId};
use tern_core::lang::literals;
use tern_core::lang::operators::{self, OperatorId};
use tern_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/asserts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
