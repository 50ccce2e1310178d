//! Define the reserved keyword vocabulary for the tern language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The word operators `and`, `or`, `not` and `as` are *not* keywords; they live in
//!   [`crate::lang::operators`] so they carry precedence and node forms.
//! - Contextual names such as `length`, `unroll`, `in` and `out` are built-in identifiers, not keywords
//!   (see [`crate::lang::builtins`]).
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::as_str(KeywordId::PackageId), "packageid");
//! assert_eq!(keywords::from_str("length"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    PackageId,
    Use,
    Pub,
    Pri,
    Const,
    Func,
    Struct,

    // Status values
    Error,
    Suspension,
    Status,

    // Type decorators
    Ptr,
    Nptr,
    Array,
    Slice,
    Table,

    // Assertions
    Assert,
    Pre,
    Inv,
    Post,
    Via,

    // Statements
    Break,
    Continue,
    IoBind,
    If,
    Else,
    Iterate,
    Return,
    Yield,
    Var,
    While,
    Try,

    // Literals
    True,
    False,
    Nullptr,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Status,
    TypeDecorator,
    Assertion,
    Statement,
    Literal,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `ends_statement` marks keywords that may legally close a line, so the lexer inserts an implicit `;`
///   after them at a newline (`return`, `break`, literals, ...).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub ends_statement: bool,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::PackageId, "packageid", KeywordCategory::Declaration, false),
    info(KeywordId::Use, "use", KeywordCategory::Declaration, false),
    info(KeywordId::Pub, "pub", KeywordCategory::Declaration, false),
    info(KeywordId::Pri, "pri", KeywordCategory::Declaration, false),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, false),
    info(KeywordId::Func, "func", KeywordCategory::Declaration, false),
    info(KeywordId::Struct, "struct", KeywordCategory::Declaration, false),
    // Status values
    info(KeywordId::Error, "error", KeywordCategory::Status, false),
    info(KeywordId::Suspension, "suspension", KeywordCategory::Status, false),
    info(KeywordId::Status, "status", KeywordCategory::Status, false),
    // Type decorators
    info(KeywordId::Ptr, "ptr", KeywordCategory::TypeDecorator, false),
    info(KeywordId::Nptr, "nptr", KeywordCategory::TypeDecorator, false),
    info(KeywordId::Array, "array", KeywordCategory::TypeDecorator, false),
    info(KeywordId::Slice, "slice", KeywordCategory::TypeDecorator, false),
    info(KeywordId::Table, "table", KeywordCategory::TypeDecorator, false),
    // Assertions
    info(KeywordId::Assert, "assert", KeywordCategory::Assertion, false),
    info(KeywordId::Pre, "pre", KeywordCategory::Assertion, false),
    info(KeywordId::Inv, "inv", KeywordCategory::Assertion, false),
    info(KeywordId::Post, "post", KeywordCategory::Assertion, false),
    info(KeywordId::Via, "via", KeywordCategory::Assertion, false),
    // Statements
    info(KeywordId::Break, "break", KeywordCategory::Statement, true),
    info(KeywordId::Continue, "continue", KeywordCategory::Statement, true),
    info(KeywordId::IoBind, "io_bind", KeywordCategory::Statement, false),
    info(KeywordId::If, "if", KeywordCategory::Statement, false),
    info(KeywordId::Else, "else", KeywordCategory::Statement, false),
    info(KeywordId::Iterate, "iterate", KeywordCategory::Statement, false),
    info(KeywordId::Return, "return", KeywordCategory::Statement, true),
    info(KeywordId::Yield, "yield", KeywordCategory::Statement, true),
    info(KeywordId::Var, "var", KeywordCategory::Statement, false),
    info(KeywordId::While, "while", KeywordCategory::Statement, false),
    info(KeywordId::Try, "try", KeywordCategory::Statement, false),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, true),
    info(KeywordId::False, "false", KeywordCategory::Literal, true),
    info(KeywordId::Nullptr, "nullptr", KeywordCategory::Literal, true),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to its keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, ends_statement: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        ends_statement,
    }
}
