//! Abstract Syntax Tree definitions for the Go subset understood by enumgen
//!
//! The tree keeps full detail for what enum discovery needs (constant groups, type declarations and
//! method signatures) and only an outline of everything else: `var` initializers and function bodies
//! are skipped by the parser and never materialized.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier
pub type Ident = String;

/// The blank identifier, used for placeholder constants such as `_ = iota`.
pub const BLANK: &str = "_";

/// One parsed `.go` file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub package: Spanned<Ident>,
    pub imports: Vec<ImportSpec>,
    pub declarations: Vec<Spanned<Declaration>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    /// `.`, `_` or a rename, when present.
    pub alias: Option<Ident>,
    pub path: String,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Const(ConstDecl),
    Var(VarDecl),
    Type(TypeDecl),
    Func(FuncDecl),
}

// ============================================================================
// Constants
// ============================================================================

/// A `const` declaration, either `const X = 1` or a parenthesized group.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub grouped: bool,
    pub specs: Vec<Spanned<ValueSpec>>,
}

/// One line of a const group: `A, B T = expr1, expr2`.
///
/// ## Notes
/// - `ty` and `values` are both empty for implicit repetition (`A` on its own line inside a group).
/// - `iota` is the zero-based position of the spec inside its declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<Spanned<Ident>>,
    pub ty: Option<Spanned<TypeExpr>>,
    pub values: Vec<Spanned<Expr>>,
    pub iota: usize,
}

// ============================================================================
// Variables
// ============================================================================

/// A `var` declaration. Only the declared names are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub names: Vec<Spanned<Ident>>,
}

// ============================================================================
// Types
// ============================================================================

/// A `type` declaration, single or grouped.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub specs: Vec<Spanned<TypeSpec>>,
}

/// `type Name T`, `type Name = T` or `type Name[P any] T`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: Spanned<Ident>,
    pub alias: bool,
    pub generic: bool,
    pub ty: Spanned<TypeExpr>,
}

/// Type expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `MyEnum`, `string`
    Named(Ident),
    /// `pkg.Type`
    Qualified { package: Ident, name: Ident },
    /// `List[T]`
    Instance { base: Box<TypeExpr>, args: Vec<TypeExpr> },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T` or `[...]T`
    Array(Box<TypeExpr>),
    /// `map[K]V`
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan(Box<TypeExpr>),
    /// `func(...) ...`
    Func(Box<Signature>),
    /// `struct { ... }`
    Struct,
    /// `interface { ... }`
    Interface,
}

impl TypeExpr {
    /// Return the identifier if this is a plain, unqualified type name.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            TypeExpr::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Return the base type name, looking through pointers and generic instantiations.
    ///
    /// This is how method receivers (`*T`, `T[K]`) are attributed to their named type.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Named(name) => Some(name),
            TypeExpr::Pointer(inner) => inner.base_name(),
            TypeExpr::Instance { base, .. } => base.base_name(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => write!(f, "{}", name),
            TypeExpr::Qualified { package, name } => write!(f, "{}.{}", package, name),
            TypeExpr::Instance { base, args } => {
                write!(f, "{}[", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, "]")
            }
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
            TypeExpr::Slice(inner) => write!(f, "[]{}", inner),
            TypeExpr::Array(inner) => write!(f, "[N]{}", inner),
            TypeExpr::Map { key, value } => write!(f, "map[{}]{}", key, value),
            TypeExpr::Chan(inner) => write!(f, "chan {}", inner),
            TypeExpr::Func(_) => write!(f, "func(...)"),
            TypeExpr::Struct => write!(f, "struct{{...}}"),
            TypeExpr::Interface => write!(f, "interface{{...}}"),
        }
    }
}

// ============================================================================
// Functions
// ============================================================================

/// A function or method declaration. The body is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub receiver: Option<Receiver>,
    pub name: Spanned<Ident>,
    pub signature: Signature,
    pub has_body: bool,
}

/// `(r *T)` on a method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    /// `None` for `func (T) M()` and for the blank receiver `_`.
    pub name: Option<Ident>,
    pub ty: Spanned<TypeExpr>,
}

impl Receiver {
    /// Name of the receiver's base type (`T` for `*T` and `T[K]`).
    pub fn base_type(&self) -> Option<&str> {
        self.ty.node.base_name()
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.ty.node, TypeExpr::Pointer(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    pub params: Vec<Param>,
    pub results: Vec<Param>,
}

/// A parameter or result. Grouped names (`a, b int`) expand to one `Param` each.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Option<Ident>,
    pub ty: TypeExpr,
    pub variadic: bool,
}

// ============================================================================
// Expressions (constant initializers)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(u128),
    Float(f64),
    Imaginary(f64),
    Rune(char),
    String(String),
    Ident(Ident),
    /// `pkg.Name` or `x.Field`
    Selector(Box<Spanned<Expr>>, Ident),
    /// `f(args)`, including conversions such as `MyEnum(1)`
    Call {
        func: Box<Spanned<Expr>>,
        args: Vec<Spanned<Expr>>,
    },
    Unary(UnaryOp, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Paren(Box<Spanned<Expr>>),
    /// A type used in expression position, e.g. the `[]byte` in `[]byte("x")`.
    Type(TypeExpr),
}

impl Expr {
    /// Return the callee identifier of `Name(...)`.
    ///
    /// This is the shape of a typed conversion such as `MyEnum(iota + 1)`.
    pub fn call_ident(&self) -> Option<&str> {
        match self {
            Expr::Call { func, .. } => match &func.node {
                Expr::Ident(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    /// Bitwise complement `^x`
    Complement,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    AndNot,
    Shl,
    Shr,
    LogicalAnd,
    LogicalOr,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq
        )
    }

    pub fn is_shift(self) -> bool {
        matches!(self, BinaryOp::Shl | BinaryOp::Shr)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::AndNot => "&^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        };
        write!(f, "{}", s)
    }
}
