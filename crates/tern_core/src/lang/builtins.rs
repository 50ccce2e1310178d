//! Built-in identifier vocabulary.
//!
//! Built-in names are ordinary identifier tokens that the language reserves for its own meaning:
//! primitive types, the implicit `in`/`out`/`this` receivers, and the contextual words used by
//! `iterate` headers. They may be *used* anywhere an identifier is expected, but declaring a new
//! func, struct or const with one of these names is rejected unless the parser is configured to allow it.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::builtins;
//!
//! assert!(builtins::is_builtin("u32"));
//! assert!(builtins::is_builtin("length"));
//! assert!(!builtins::is_builtin("decoder"));
//! ```

/// Every built-in identifier, grouped by role.
pub const BUILTINS: &[&str] = &[
    // Types
    "bool",
    "u8",
    "u16",
    "u32",
    "u64",
    "i8",
    "i16",
    "i32",
    "i64",
    "usize",
    "buf1",
    "buf2",
    "reader1",
    "writer1",
    "io_reader",
    "io_writer",
    // Receivers
    "in",
    "out",
    "this",
    "args",
    // Contextual words
    "length",
    "unroll",
    "low_bits",
    "high_bits",
];

/// Spelling of the implicit input receiver, the only root allowed in `io_bind` selectors.
pub const IN: &str = "in";
pub const LENGTH: &str = "length";
pub const UNROLL: &str = "unroll";

/// Return `true` if `name` is reserved as a built-in identifier.
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Return `true` if `name` starts with two underscores, a spelling reserved for generated code.
pub fn is_double_underscore(name: &str) -> bool {
    name.starts_with("__")
}
