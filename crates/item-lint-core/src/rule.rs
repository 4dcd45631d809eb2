//! Rule trait for defining lint rules.

use crate::ast::Module;
use crate::context::FileContext;
use crate::types::{Diagnostic, Severity};

/// A per-module lint rule over the host-supplied AST.
///
/// Implement this trait to create rules that analyze one module at a time.
/// Rules receive the host's lowered AST and typically use the visitor
/// pattern from [`crate::visit`] to traverse it.
///
/// # Example
///
/// ```ignore
/// use item_lint_core::{Diagnostic, FileContext, Rule};
/// use item_lint_core::ast::Module;
/// use item_lint_core::visit::Visit;
///
/// pub struct NoImportsAtAll;
///
/// impl Rule for NoImportsAtAll {
///     fn name(&self) -> &'static str { "no-imports-at-all" }
///     fn code(&self) -> &'static str { "IL999" }
///
///     fn check(&self, ctx: &FileContext, module: &Module) -> Vec<Diagnostic> {
///         let mut visitor = ImportVisitor::new(ctx);
///         visitor.visit_module(module);
///         visitor.diagnostics
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "restricted-module-items").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "IL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single module and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `module` - The host's lowered syntax tree for that file
    ///
    /// # Returns
    ///
    /// A vector of diagnostics found in this module.
    fn check(&self, ctx: &FileContext, module: &Module) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
