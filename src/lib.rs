#![forbid(unsafe_code)]
//! tern: the front end of a small, safety-oriented DSL for byte-stream parsers and codecs.
//!
//! This crate ties the workspace together: it re-exports the syntax frontend (lexer, parser, AST,
//! diagnostics) and hosts the `tern` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: Registry lookups by id (`info_for`) panic only on a registry bug.

pub mod cli;
pub mod version;

pub use tern_core::lang;
pub use tern_syntax::ast;
pub use tern_syntax::diagnostics;
pub use tern_syntax::lexer;
pub use tern_syntax::parser;

pub use tern_syntax::parser::{ParseOptions, parse, parse_expr, parse_source};
