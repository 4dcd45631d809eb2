//! Host-facing AST node model.
//!
//! This engine does not parse source text. The host front end owns parsing
//! and lowers its own syntax tree into these nodes, one [`Module`] per file.
//! Only the node kinds the rules distinguish get their own variant; every
//! other shape is folded into an `Other` catch-all that keeps its children,
//! so traversal still reaches nodes nested inside unmodeled constructs.

use serde::{Deserialize, Serialize};

/// Source position reported by the host front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in the file (for rich rendering).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span from line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this span.
    #[must_use]
    pub fn with_bytes(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// An expression, reduced to the shapes the rules distinguish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// A bare name reference, e.g. `join`.
    Name(Name),
    /// An attribute access on a base expression, e.g. `os.path`.
    Attribute(Attribute),
    /// A call expression, e.g. `f(x)`.
    Call(Box<Call>),
    /// Any other expression kind (subscript, literal, lambda, ...).
    Other(OtherExpr),
}

impl Expr {
    /// Builds a name reference.
    #[must_use]
    pub fn name(id: impl Into<String>, span: Span) -> Self {
        Self::Name(Name {
            id: id.into(),
            span,
        })
    }

    /// Builds an attribute access on `value`.
    #[must_use]
    pub fn attribute(value: Self, attr: impl Into<String>, span: Span) -> Self {
        Self::Attribute(Attribute {
            value: Box::new(value),
            attr: attr.into(),
            span,
        })
    }

    /// Builds a call of `func`.
    #[must_use]
    pub fn call(func: Self, args: Vec<Self>, span: Span) -> Self {
        Self::Call(Box::new(Call { func, args, span }))
    }

    /// Builds a catch-all expression of the given host node kind.
    #[must_use]
    pub fn other(kind: impl Into<String>, children: Vec<Self>, span: Span) -> Self {
        Self::Other(OtherExpr {
            kind: kind.into(),
            children,
            span,
        })
    }

    /// Returns the span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Name(n) => n.span,
            Self::Attribute(a) => a.span,
            Self::Call(c) => c.span,
            Self::Other(o) => o.span,
        }
    }
}

/// A bare name reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// The referenced identifier.
    pub id: String,
    /// Source position.
    pub span: Span,
}

/// An attribute access: a base expression plus a trailing field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// The base expression the attribute is read from.
    pub value: Box<Expr>,
    /// The accessed field name.
    pub attr: String,
    /// Source position.
    pub span: Span,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// The callee expression.
    pub func: Expr,
    /// Call arguments, in source order.
    pub args: Vec<Expr>,
    /// Source position.
    pub span: Span,
}

/// An expression kind the rules do not distinguish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherExpr {
    /// Host node kind, kept for debugging (e.g. `subscript`).
    pub kind: String,
    /// Child expressions, in source order.
    pub children: Vec<Expr>,
    /// Source position.
    pub span: Span,
}

/// A statement, reduced to the shapes the rules distinguish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// An expression evaluated for effect.
    Expr(Expr),
    /// A `from module import names` statement.
    ImportFrom(ImportFrom),
    /// Any other statement kind; nested code stays walkable.
    Other(OtherStmt),
}

/// A `from module import names` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFrom {
    /// The source module path, dotted. `None` marks a relative import
    /// (`from . import x`), which has no absolute module path.
    pub module: Option<String>,
    /// The imported names, in statement order.
    pub names: Vec<ImportedName>,
    /// Source position.
    pub span: Span,
}

/// One imported name with its optional local alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedName {
    /// The original name as it exists in the source module.
    pub name: String,
    /// The local binding from an `as` clause, if any.
    pub alias: Option<String>,
}

impl ImportedName {
    /// An import without an alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// An import bound to a local alias (`from m import name as alias`).
    #[must_use]
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

/// A statement kind the rules do not distinguish.
///
/// Function bodies, class bodies, branches and loops all arrive as `Other`
/// nodes; their nested expressions and statements are preserved so that
/// calls and imports inside them are still visited in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherStmt {
    /// Host node kind, kept for debugging (e.g. `function_def`).
    pub kind: String,
    /// Child expressions, in source order (e.g. an assignment's operands).
    pub exprs: Vec<Expr>,
    /// Nested statements, in source order (e.g. a function body).
    pub body: Vec<Stmt>,
    /// Source position.
    pub span: Span,
}

impl OtherStmt {
    /// Builds a catch-all statement of the given host node kind.
    #[must_use]
    pub fn new(kind: impl Into<String>, span: Span) -> Self {
        Self {
            kind: kind.into(),
            exprs: Vec::new(),
            body: Vec::new(),
            span,
        }
    }

    /// Attaches child expressions.
    #[must_use]
    pub fn with_exprs(mut self, exprs: Vec<Expr>) -> Self {
        self.exprs = exprs;
        self
    }

    /// Attaches nested statements.
    #[must_use]
    pub fn with_body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }
}

/// The per-file root node supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Top-level statements, in document order.
    pub body: Vec<Stmt>,
}

impl Module {
    /// Creates a module from its top-level statements.
    #[must_use]
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}
