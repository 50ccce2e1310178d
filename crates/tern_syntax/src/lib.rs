//! Syntax frontend for tern: lexer, parser, AST, diagnostics.
//!
//! The parser is a single-pass recursive descent over a token slice with one token of lookahead. It is
//! fail-fast: the first problem is returned as a located [`diagnostics::SyntaxError`] and no partial tree
//! is produced.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve names, check types or generate code.
//! - Vocabulary identity (keywords/operators/punctuation/built-ins) comes from `tern_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use tern_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("demo.tern", "pri const N u32 = 4\n").unwrap();
//! let file = parser::parse("demo.tern", &tokens, &parser::ParseOptions::default()).unwrap();
//! assert_eq!(file.declarations.len(), 1);
//! ```
//!
//! ## See also
//! - `tern_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
