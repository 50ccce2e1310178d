//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators like
//! `and`) together with the node *forms* each operator produces: the binary, unary, associative and
//! assignment shapes the parser builds when it meets the operator in that position.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `precedence` is a relative ordering where higher binds tighter; `0` means "not a binary operator".
//! - A token that claims to be a binary (unary, associative) operator but has no matching form is a
//!   registry bug, and the parser reports it as an internal error rather than a user error.
//!
//! ## Examples
//! ```rust
//! use tern_core::lang::operators::{self, AssociativeOp, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert!(operators::is_associative_op(OperatorId::Plus));
//! assert!(!operators::is_associative_op(OperatorId::Minus));
//! assert_eq!(operators::associative_form(OperatorId::Plus), Some(AssociativeOp::Add));
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic / bitwise
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Shl,
    Shr,
    Amp,
    AmpHat,
    Pipe,
    Hat,
    TildePlus,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Word operators
    And,
    Or,
    Not,
    As,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    ShrEq,
    AmpEq,
    AmpHatEq,
    PipeEq,
    HatEq,
    TildePlusEq,
}

/// Binary node form (`lhs op rhs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitAndNot,
    BitOr,
    BitXor,
    WrappingAdd,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    /// `x as T`: the right-hand side is a type expression, not an operand.
    As,
}

/// Unary (prefix) node form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
}

/// Associative node form: one operator applied across two or more operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociativeOp {
    Add,
    Mul,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
}

/// Assignment statement form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    BitAnd,
    BitAndNot,
    BitOr,
    BitXor,
    WrappingAdd,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub binary: Option<BinaryOp>,
    pub unary: Option<UnaryOp>,
    pub associative: Option<AssociativeOp>,
    pub assign: Option<AssignOp>,
    pub is_keyword_spelling: bool,
}

/// Highest binary precedence in [`OPERATORS`].
pub const MAX_PRECEDENCE: u8 = 6;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Additive level (4)
    OperatorInfo {
        unary: Some(UnaryOp::Plus),
        associative: Some(AssociativeOp::Add),
        ..binary(OperatorId::Plus, "+", 4, BinaryOp::Add)
    },
    OperatorInfo {
        unary: Some(UnaryOp::Neg),
        ..binary(OperatorId::Minus, "-", 4, BinaryOp::Sub)
    },
    OperatorInfo {
        associative: Some(AssociativeOp::BitOr),
        ..binary(OperatorId::Pipe, "|", 4, BinaryOp::BitOr)
    },
    OperatorInfo {
        associative: Some(AssociativeOp::BitXor),
        ..binary(OperatorId::Hat, "^", 4, BinaryOp::BitXor)
    },
    binary(OperatorId::TildePlus, "~+", 4, BinaryOp::WrappingAdd),
    // Multiplicative level (5)
    OperatorInfo {
        associative: Some(AssociativeOp::Mul),
        ..binary(OperatorId::Star, "*", 5, BinaryOp::Mul)
    },
    binary(OperatorId::Slash, "/", 5, BinaryOp::Div),
    binary(OperatorId::Percent, "%", 5, BinaryOp::Mod),
    binary(OperatorId::Shl, "<<", 5, BinaryOp::Shl),
    binary(OperatorId::Shr, ">>", 5, BinaryOp::Shr),
    OperatorInfo {
        associative: Some(AssociativeOp::BitAnd),
        ..binary(OperatorId::Amp, "&", 5, BinaryOp::BitAnd)
    },
    binary(OperatorId::AmpHat, "&^", 5, BinaryOp::BitAndNot),
    // Comparison level (3)
    binary(OperatorId::EqEq, "==", 3, BinaryOp::Eq),
    binary(OperatorId::NotEq, "!=", 3, BinaryOp::NotEq),
    binary(OperatorId::Lt, "<", 3, BinaryOp::Lt),
    binary(OperatorId::LtEq, "<=", 3, BinaryOp::LtEq),
    binary(OperatorId::Gt, ">", 3, BinaryOp::Gt),
    binary(OperatorId::GtEq, ">=", 3, BinaryOp::GtEq),
    // Word operators
    OperatorInfo {
        associative: Some(AssociativeOp::And),
        is_keyword_spelling: true,
        ..binary(OperatorId::And, "and", 2, BinaryOp::And)
    },
    OperatorInfo {
        associative: Some(AssociativeOp::Or),
        is_keyword_spelling: true,
        ..binary(OperatorId::Or, "or", 1, BinaryOp::Or)
    },
    OperatorInfo {
        unary: Some(UnaryOp::Not),
        is_keyword_spelling: true,
        ..none(OperatorId::Not, "not")
    },
    OperatorInfo {
        is_keyword_spelling: true,
        ..binary(OperatorId::As, "as", MAX_PRECEDENCE, BinaryOp::As)
    },
    // Assignment
    assign(OperatorId::Eq, "=", AssignOp::Assign),
    assign(OperatorId::PlusEq, "+=", AssignOp::Add),
    assign(OperatorId::MinusEq, "-=", AssignOp::Sub),
    assign(OperatorId::StarEq, "*=", AssignOp::Mul),
    assign(OperatorId::SlashEq, "/=", AssignOp::Div),
    assign(OperatorId::PercentEq, "%=", AssignOp::Mod),
    assign(OperatorId::ShlEq, "<<=", AssignOp::Shl),
    assign(OperatorId::ShrEq, ">>=", AssignOp::Shr),
    assign(OperatorId::AmpEq, "&=", AssignOp::BitAnd),
    assign(OperatorId::AmpHatEq, "&^=", AssignOp::BitAndNot),
    assign(OperatorId::PipeEq, "|=", AssignOp::BitOr),
    assign(OperatorId::HatEq, "^=", AssignOp::BitXor),
    assign(OperatorId::TildePlusEq, "~+=", AssignOp::WrappingAdd),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the source spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Spelling of the first registry entry matching `pred`.
///
/// ## Panics
/// - If no entry matches (a node form with no operator token is a programming error).
fn spelling_where(pred: impl Fn(&OperatorInfo) -> bool) -> &'static str {
    OPERATORS.iter().find(|o| pred(o)).map(|o| o.spelling).expect("node form has no operator")
}

impl BinaryOp {
    /// Source spelling of this node form, e.g. `&^` for [`BinaryOp::BitAndNot`].
    pub fn as_str(self) -> &'static str {
        spelling_where(|o| o.binary == Some(self))
    }
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        spelling_where(|o| o.unary == Some(self))
    }
}

impl AssociativeOp {
    pub fn as_str(self) -> &'static str {
        spelling_where(|o| o.associative == Some(self))
    }
}

/// Binding strength of `id` as an infix operator, or `None` if it is not one.
pub fn precedence(id: OperatorId) -> Option<u8> {
    match info_for(id).precedence {
        0 => None,
        p => Some(p),
    }
}

pub fn is_binary_op(id: OperatorId) -> bool {
    info_for(id).precedence > 0
}

pub fn is_unary_op(id: OperatorId) -> bool {
    info_for(id).unary.is_some()
}

pub fn is_associative_op(id: OperatorId) -> bool {
    info_for(id).associative.is_some()
}

pub fn is_assign_op(id: OperatorId) -> bool {
    info_for(id).assign.is_some()
}

pub fn binary_form(id: OperatorId) -> Option<BinaryOp> {
    info_for(id).binary
}

pub fn unary_form(id: OperatorId) -> Option<UnaryOp> {
    info_for(id).unary
}

pub fn associative_form(id: OperatorId) -> Option<AssociativeOp> {
    info_for(id).associative
}

pub fn assign_form(id: OperatorId) -> Option<AssignOp> {
    info_for(id).assign
}

// --- helpers -----------------------------------------------------------------

const fn none(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence: 0,
        binary: None,
        unary: None,
        associative: None,
        assign: None,
        is_keyword_spelling: false,
    }
}

const fn binary(id: OperatorId, spelling: &'static str, precedence: u8, form: BinaryOp) -> OperatorInfo {
    OperatorInfo {
        precedence,
        binary: Some(form),
        ..none(id, spelling)
    }
}

const fn assign(id: OperatorId, spelling: &'static str, form: AssignOp) -> OperatorInfo {
    OperatorInfo {
        assign: Some(form),
        ..none(id, spelling)
    }
}
