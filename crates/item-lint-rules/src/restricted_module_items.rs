//! Rule to flag uses of restricted module items.
//!
//! # Rationale
//!
//! Teams sometimes deny one specific member of a module (a function reached
//! through a particular import path) without banning the whole module. Both
//! ways of reaching the member count as a use: calling it through its dotted
//! path, and binding it with `from module import name`.
//!
//! # Detected Patterns
//!
//! - `os.path.join(a, b)` when `os.path.join` is restricted
//! - `from os.path import join` when `os.path.join` is restricted
//! - `from os.path import join as j` (matching is on the original name)
//!
//! # Skipped Patterns
//!
//! - Call targets that are not plain dotted paths (`f().join(...)`,
//!   `items[0].join(...)`): no static module-item identifier exists for them
//! - Relative imports (`from . import join`): no absolute module path
//!
//! # Configuration
//!
//! - `items`: restricted module-item identifiers, each with at least one dot
//! - `message`: override for the diagnostic message prefix

use tracing::debug;

use item_lint_core::ast::{Call, ImportFrom, Module};
use item_lint_core::visit::{self, Visit};
use item_lint_core::{
    Denylist, Diagnostic, FileContext, IdentError, Location, ModuleItem, Rule, RuleConfig,
    Severity,
};

/// Rule code for restricted-module-items.
pub const CODE: &str = "IL001";

/// Rule name for restricted-module-items.
pub const NAME: &str = "restricted-module-items";

const DEFAULT_MESSAGE: &str = "Use of a restricted module item";

/// Flags calls to and imports of restricted module items.
#[derive(Debug, Clone)]
pub struct RestrictedModuleItems {
    denylist: Denylist,
    message: String,
    severity: Severity,
}

impl RestrictedModuleItems {
    /// Creates the rule from validated identifiers.
    #[must_use]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ModuleItem>,
    {
        Self {
            denylist: Denylist::new(items),
            message: DEFAULT_MESSAGE.to_string(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from raw identifier strings.
    ///
    /// # Errors
    ///
    /// Fails on the first entry with no dot. This is a configuration-time
    /// error: it surfaces before any node is visited.
    pub fn parse<I, S>(entries: I) -> Result<Self, IdentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            denylist: Denylist::parse(entries)?,
            message: DEFAULT_MESSAGE.to_string(),
            severity: Severity::Error,
        })
    }

    /// Creates the rule from its `[rules.restricted-module-items]` table.
    ///
    /// # Errors
    ///
    /// Fails if any entry of `items` is not a valid module-item identifier.
    pub fn from_config(config: &RuleConfig) -> Result<Self, IdentError> {
        let mut rule = Self::parse(config.get_str_array("items"))?;
        rule.message = config.get_str("message", DEFAULT_MESSAGE).to_string();
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        debug!("Loaded {} restricted item(s)", rule.denylist.len());
        Ok(rule)
    }

    /// Sets the diagnostic message prefix.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn diagnostic(&self, location: Location, item: &str) -> Diagnostic {
        Diagnostic::new(
            CODE,
            NAME,
            self.severity,
            location,
            item,
            format!("{}: `{item}`", self.message),
        )
    }
}

impl Rule for RestrictedModuleItems {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags calls to and imports of restricted module items"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &Module) -> Vec<Diagnostic> {
        if self.denylist.is_empty() {
            return Vec::new();
        }

        let mut visitor = ItemVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(module);
        visitor.diagnostics
    }
}

/// Checks one call expression against the denylist.
///
/// A pure function of (node, index): resolves the callee to a dotted
/// identifier and probes the exact-match set. Unresolvable callees are the
/// expected case for most calls and produce nothing.
fn check_call(
    rule: &RestrictedModuleItems,
    ctx: &FileContext,
    node: &Call,
) -> Option<Diagnostic> {
    let ident = item_lint_core::dotted_path(&node.func)?;
    if !rule.denylist.contains(&ident) {
        return None;
    }
    let location = Location::from_span(ctx.relative_path.clone(), node.span);
    Some(rule.diagnostic(location, &ident))
}

/// Checks one from-import statement against the denylist.
///
/// Matching is on the original imported name; an `as` alias does not change
/// what was imported. One diagnostic is emitted per restricted name, in
/// statement order.
fn check_import_from(
    rule: &RestrictedModuleItems,
    ctx: &FileContext,
    node: &ImportFrom,
) -> Vec<Diagnostic> {
    // A relative import has no absolute module path and is never flagged.
    let Some(module) = node.module.as_deref() else {
        return Vec::new();
    };
    let Some(restricted) = rule.denylist.module_items(module) else {
        return Vec::new();
    };

    node.names
        .iter()
        .filter(|imported| restricted.contains(&imported.name))
        .map(|imported| {
            let item = ModuleItem::from_parts(module, &imported.name);
            let location = Location::from_span(ctx.relative_path.clone(), node.span);
            rule.diagnostic(location, item.as_str())
        })
        .collect()
}

struct ItemVisitor<'a> {
    ctx: &'a FileContext<'a>,
    rule: &'a RestrictedModuleItems,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for ItemVisitor<'_> {
    fn visit_call(&mut self, node: &'ast Call) {
        if let Some(diagnostic) = check_call(self.rule, self.ctx, node) {
            self.diagnostics.push(diagnostic);
        }
        visit::visit_call(self, node);
    }

    fn visit_import_from(&mut self, node: &'ast ImportFrom) {
        self.diagnostics
            .extend(check_import_from(self.rule, self.ctx, node));
        visit::visit_import_from(self, node);
    }
}
