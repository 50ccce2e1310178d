//! Provide the canonical language vocabulary for the tern compiler front end.
//!
//! This crate is intentionally small and dependency-free. It answers the classification questions the
//! parser asks about tokens (is this a binary operator? what is its associative form? is this name a
//! built-in?) and hosts a couple of pure encoders used to validate literals.
//!
//! ## Notes
//!
//! - No IO, no global state, and no AST types. The syntax crate owns the tree; this crate only describes
//!   the vocabulary the tree is built from.
//! - Operator node forms ([`lang::operators::BinaryOp`] and friends) live here so the registry can map a
//!   token to the node kind it produces without depending on the parser.

pub mod lang;
