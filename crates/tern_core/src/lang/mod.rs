//! tern language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via const registry tables, instead of comparing strings throughout the front end.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and classification.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("iterate"), Some(KeywordId::Iterate));
//! assert_eq!(keywords::as_str(KeywordId::IoBind), "io_bind");
//! ```

pub mod base38;
pub mod builtins;
pub mod keywords;
pub mod literals;
pub mod operators;
pub mod punctuation;
