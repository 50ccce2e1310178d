//! Abstract Syntax Tree definitions for tern.
//!
//! Every node kind is a closed sum type; later stages match exhaustively. Nodes own their children
//! outright (no sharing, no cycles). Each node is wrapped in [`Spanned`], which records the filename and
//! line of the node's first token.

use std::fmt;
use std::sync::Arc;

pub use tern_core::lang::operators::{AssignOp, AssociativeOp, BinaryOp, UnaryOp};

/// Source location: the file a node came from and the line of its first token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    pub filename: Arc<str>,
    pub line: u32,
}

impl Pos {
    pub fn new(filename: Arc<str>, line: u32) -> Self {
        Self { filename, line }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub pos: Pos,
}

impl<T> Spanned<T> {
    pub fn new(node: T, pos: Pos) -> Self {
        Self { node, pos }
    }

    pub fn line(&self) -> u32 {
        self.pos.line
    }
}

/// Identifier spelling.
pub type Ident = String;

/// A block is the statement list between `{` and `}`.
pub type Block = Vec<Spanned<Statement>>;

/// A parsed source file: its top-level declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub filename: Arc<str>,
    pub declarations: Vec<Spanned<Declaration>>,
}

// ============================================================================
// Flags
// ============================================================================

/// Visibility of a flagged declaration (`pub` or `pri`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// Side effects a func (or call) may have.
///
/// `!` marks a func or call impure; `?` marks it suspendible, which implies impure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Effect {
    #[default]
    Pure,
    Impure,
    Suspendible,
}

impl Effect {
    pub fn is_impure(self) -> bool {
        self >= Effect::Impure
    }

    pub fn is_suspendible(self) -> bool {
        self == Effect::Suspendible
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    PackageId(PackageIdDecl),
    Use(UseDecl),
    Const(ConstDecl),
    Func(FuncDecl),
    Status(StatusDecl),
    Struct(StructDecl),
}

/// `packageid "json"`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageIdDecl {
    pub id: String,
    /// Base-38 encoding of `id`; never zero.
    pub code: u32,
}

/// `use "std/deflate"`
#[derive(Debug, Clone, PartialEq)]
pub struct UseDecl {
    pub path: String,
}

/// `pub const NAME type = value`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub visibility: Visibility,
    pub name: Ident,
    pub ty: Spanned<TypeExpr>,
    /// A plain expression or an [`Expr::Dollar`] aggregate.
    pub value: Spanned<Expr>,
}

/// `pub func recv.name?(in fields) (out fields), asserts { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub visibility: Visibility,
    pub effect: Effect,
    pub receiver: Option<Ident>,
    pub name: Ident,
    pub in_fields: Vec<Spanned<Field>>,
    pub out_fields: Vec<Spanned<Field>>,
    pub asserts: Vec<Spanned<Assert>>,
    pub body: Block,
}

/// Keyword of a status declaration or status literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKeyword {
    Error,
    Status,
    Suspension,
}

/// `pub error (value) "message"`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDecl {
    pub visibility: Visibility,
    pub keyword: StatusKeyword,
    pub value: Spanned<Expr>,
    pub message: String,
}

/// `pub struct name?(fields)`
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub visibility: Visibility,
    pub suspendible: bool,
    pub name: Ident,
    pub fields: Vec<Spanned<Field>>,
}

/// A `name type` pair in a parameter list or struct body.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Ident,
    pub ty: Spanned<TypeExpr>,
}

/// A `name: value` pair in a call or `via` argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: Ident,
    pub value: Spanned<Expr>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assert(Assert),
    Jump(JumpStmt),
    IoBind(IoBindStmt),
    If(IfStmt),
    Iterate(IterateStmt),
    Ret(RetStmt),
    Var(VarStmt),
    While(WhileStmt),
    Assign(AssignStmt),
    /// A bare expression, usually a call evaluated for its effect.
    Expr(Spanned<Expr>),
}

/// Assertion keyword, ordered by its position in an assertion chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssertKeyword {
    Assert,
    Pre,
    Inv,
    Post,
}

/// `assert cond via "reason"(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct Assert {
    pub keyword: AssertKeyword,
    pub condition: Spanned<Expr>,
    pub reason: Option<String>,
    pub args: Vec<Spanned<Arg>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Break,
    Continue,
}

/// `break` / `continue:label`
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStmt {
    pub kind: JumpKind,
    pub label: Option<Ident>,
}

/// `io_bind (in.src, in.dst) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct IoBindStmt {
    /// Each binding is a bare identifier or a selector rooted at `in`.
    pub bindings: Vec<Spanned<Expr>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_body: Block,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    If(Box<Spanned<IfStmt>>),
    Block(Block),
}

/// `iterate:label (vars) (length: N, unroll: M), asserts { body } else iterate-block`
#[derive(Debug, Clone, PartialEq)]
pub struct IterateStmt {
    pub label: Option<Ident>,
    pub vars: Vec<Spanned<VarStmt>>,
    pub length: u32,
    pub unroll: u32,
    pub asserts: Vec<Spanned<Assert>>,
    pub body: Block,
    /// Tail loop, stamped at its `else`; never labelled and never declares variables.
    pub else_iterate: Option<Box<Spanned<IterateStmt>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetKind {
    Return,
    Yield,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetStmt {
    pub kind: RetKind,
    pub value: Option<Spanned<Expr>>,
}

/// `var name type = init` or, in an iterate/io_bind variable list, `name type =: init`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    pub name: Ident,
    pub ty: Spanned<TypeExpr>,
    pub init: Option<VarInit>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VarInit {
    /// `= value`; the value may be an [`Expr::Try`].
    Assign(Spanned<Expr>),
    /// `=: value`, binding an iterate induction variable.
    Bind(Spanned<Expr>),
}

/// `while:label cond, asserts { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub label: Option<Ident>,
    pub condition: Spanned<Expr>,
    pub asserts: Vec<Spanned<Assert>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub lhs: Spanned<Expr>,
    pub op: AssignOp,
    pub rhs: Spanned<Expr>,
}

// ============================================================================
// Type expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Pointer(Box<Spanned<TypeExpr>>),
    NullablePointer(Box<Spanned<TypeExpr>>),
    Array {
        length: Box<Spanned<Expr>>,
        inner: Box<Spanned<TypeExpr>>,
    },
    Slice(Box<Spanned<TypeExpr>>),
    Table(Box<Spanned<TypeExpr>>),
    Named {
        package: Option<Ident>,
        name: Ident,
        refinement: Option<Refinement>,
    },
}

/// `[low..high]` suffix restricting a named type's legal values; either bound may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Refinement {
    pub low: Option<Box<Spanned<Expr>>>,
    pub high: Option<Box<Spanned<Expr>>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal, kept as written (values may exceed any machine width).
    Number(String),
    Str(String),
    Bool(bool),
    Nullptr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Spanned<Expr>>,
    pub effect: Effect,
    pub args: Vec<Spanned<Arg>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Ident(Ident),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    /// Two or more operands joined by the same associative operator.
    Associative(AssociativeOp, Vec<Spanned<Expr>>),
    /// `value as type`
    Cast(Box<Spanned<Expr>>, Box<Spanned<TypeExpr>>),
    Call(CallExpr),
    /// `receiver[index]`
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// `receiver[low:high]`, either bound optional.
    Slice {
        receiver: Box<Spanned<Expr>>,
        low: Option<Box<Spanned<Expr>>>,
        high: Option<Box<Spanned<Expr>>>,
    },
    /// `receiver.field`
    Selector(Box<Spanned<Expr>>, Ident),
    /// `try call(...)`
    Try(CallExpr),
    /// `$(a, b, $(c, d))`
    Dollar(Vec<Spanned<Expr>>),
    /// `error "message"`, `status "message"`, `suspension "message"`
    Status(StatusKeyword, String),
}

impl Expr {
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Ident(name) => Some(name),
            _ => None,
        }
    }
}

// ============================================================================
// Source rendering
// ----------------------------------------------------------------------------
// Expressions and types print back as source text, for diagnostics. Nested
// operator expressions are parenthesized; literal strings print escaped.
// ============================================================================

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)
    }
}

/// Write `expr`, wrapped in parentheses if it is itself an operator expression.
fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &Spanned<Expr>) -> fmt::Result {
    match expr.node {
        Expr::Binary(..) | Expr::Associative(..) | Expr::Cast(..) => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

fn fmt_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(spelling) => f.write_str(spelling),
            Literal::Str(value) => write!(f, "{value:?}"),
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Nullptr => f.write_str("nullptr"),
        }
    }
}

impl fmt::Display for StatusKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusKeyword::Error => "error",
            StatusKeyword::Status => "status",
            StatusKeyword::Suspension => "suspension",
        })
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.effect {
            Effect::Pure => "",
            Effect::Impure => "!",
            Effect::Suspendible => "?",
        };
        write!(f, "{}{marker}(", self.callee)?;
        fmt_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{literal}"),
            Expr::Ident(name) => f.write_str(name),
            Expr::Unary(op, operand) => {
                f.write_str(op.as_str())?;
                if *op == UnaryOp::Not {
                    f.write_str(" ")?;
                }
                fmt_operand(f, operand)
            }
            Expr::Binary(lhs, op, rhs) => {
                fmt_operand(f, lhs)?;
                write!(f, " {} ", op.as_str())?;
                fmt_operand(f, rhs)
            }
            Expr::Associative(op, operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op.as_str())?;
                    }
                    fmt_operand(f, operand)?;
                }
                Ok(())
            }
            Expr::Cast(value, ty) => {
                fmt_operand(f, value)?;
                write!(f, " as {ty}")
            }
            Expr::Call(call) => write!(f, "{call}"),
            Expr::Index(receiver, index) => write!(f, "{receiver}[{index}]"),
            Expr::Slice { receiver, low, high } => {
                write!(f, "{receiver}[")?;
                if let Some(low) = low {
                    write!(f, "{low}")?;
                }
                f.write_str(":")?;
                if let Some(high) = high {
                    write!(f, "{high}")?;
                }
                f.write_str("]")
            }
            Expr::Selector(receiver, field) => write!(f, "{receiver}.{field}"),
            Expr::Try(call) => write!(f, "try {call}"),
            Expr::Dollar(elements) => {
                f.write_str("$(")?;
                fmt_list(f, elements)?;
                f.write_str(")")
            }
            Expr::Status(keyword, message) => write!(f, "{keyword} {message:?}"),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Pointer(inner) => write!(f, "ptr {inner}"),
            TypeExpr::NullablePointer(inner) => write!(f, "nptr {inner}"),
            TypeExpr::Array { length, inner } => write!(f, "array[{length}] {inner}"),
            TypeExpr::Slice(inner) => write!(f, "slice {inner}"),
            TypeExpr::Table(inner) => write!(f, "table {inner}"),
            TypeExpr::Named {
                package,
                name,
                refinement,
            } => {
                if let Some(package) = package {
                    write!(f, "{package}.")?;
                }
                f.write_str(name)?;
                if let Some(Refinement { low, high }) = refinement {
                    f.write_str("[")?;
                    if let Some(low) = low {
                        write!(f, "{low}")?;
                    }
                    f.write_str("..")?;
                    if let Some(high) = high {
                        write!(f, "{high}")?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
        }
    }
}
