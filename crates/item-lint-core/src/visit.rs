//! AST traversal in the visitor pattern.
//!
//! Mirrors the shape of `syn::visit`: implement [`Visit`], override the
//! methods for the node kinds you care about, and call back into the free
//! `visit_*` functions to keep descending. Traversal is depth-first in
//! document order.

use crate::ast::{Call, Expr, ImportFrom, Module, Stmt};

/// Syntax tree traversal over a shared borrow of a host module.
pub trait Visit<'ast> {
    /// Visits the per-file root node.
    fn visit_module(&mut self, node: &'ast Module) {
        visit_module(self, node);
    }

    /// Visits a statement.
    fn visit_stmt(&mut self, node: &'ast Stmt) {
        visit_stmt(self, node);
    }

    /// Visits a `from module import names` statement.
    fn visit_import_from(&mut self, node: &'ast ImportFrom) {
        visit_import_from(self, node);
    }

    /// Visits an expression.
    fn visit_expr(&mut self, node: &'ast Expr) {
        visit_expr(self, node);
    }

    /// Visits a call expression.
    fn visit_call(&mut self, node: &'ast Call) {
        visit_call(self, node);
    }
}

/// Walks all statements of a module.
pub fn visit_module<'ast, V>(v: &mut V, node: &'ast Module)
where
    V: Visit<'ast> + ?Sized,
{
    for stmt in &node.body {
        v.visit_stmt(stmt);
    }
}

/// Walks a statement's children.
pub fn visit_stmt<'ast, V>(v: &mut V, node: &'ast Stmt)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Stmt::Expr(expr) => v.visit_expr(expr),
        Stmt::ImportFrom(import) => v.visit_import_from(import),
        Stmt::Other(other) => {
            for expr in &other.exprs {
                v.visit_expr(expr);
            }
            for stmt in &other.body {
                v.visit_stmt(stmt);
            }
        }
    }
}

/// Leaf node: a from-import has no visitable children.
pub fn visit_import_from<'ast, V>(_v: &mut V, _node: &'ast ImportFrom)
where
    V: Visit<'ast> + ?Sized,
{
}

/// Walks an expression's children.
pub fn visit_expr<'ast, V>(v: &mut V, node: &'ast Expr)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Expr::Name(_) => {}
        Expr::Attribute(attr) => v.visit_expr(&attr.value),
        Expr::Call(call) => v.visit_call(call),
        Expr::Other(other) => {
            for child in &other.children {
                v.visit_expr(child);
            }
        }
    }
}

/// Walks a call's callee and arguments.
pub fn visit_call<'ast, V>(v: &mut V, node: &'ast Call)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_expr(&node.func);
    for arg in &node.args {
        v.visit_expr(arg);
    }
}
