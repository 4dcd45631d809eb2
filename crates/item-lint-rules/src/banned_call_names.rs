//! Rule to ban calls to individually-named functions.
//!
//! # Rationale
//!
//! Some names are wrong to call no matter how they are reached; the
//! canonical case is `urlparse`/`urlunparse`, which implement RFC 1808
//! semantics rather than RFC 3986. Unlike
//! [`restricted-module-items`](crate::RestrictedModuleItems), matching is by
//! the terminal name of the call target alone, so `urlparse(u)`,
//! `urllib.parse.urlparse(u)`, and `parser().urlparse(u)` all match a ban on
//! `urlparse`.
//!
//! # Configuration
//!
//! - `names`: the banned bare names
//! - `message`: override for the diagnostic message prefix
//! - `suggestion`: replacement hint appended as help text

use std::collections::HashSet;

use item_lint_core::ast::{Call, Expr, Module};
use item_lint_core::visit::{self, Visit};
use item_lint_core::{
    Diagnostic, FileContext, Location, Rule, RuleConfig, Severity, Suggestion,
};

/// Rule code for banned-call-names.
pub const CODE: &str = "IL002";

/// Rule name for banned-call-names.
pub const NAME: &str = "banned-call-names";

const DEFAULT_MESSAGE: &str = "Call to a banned name";

/// Bans calls by the terminal name of the call target.
#[derive(Debug, Clone)]
pub struct BannedCallNames {
    names: HashSet<String>,
    message: String,
    suggestion: Option<String>,
    severity: Severity,
}

impl BannedCallNames {
    /// Creates the rule from banned bare names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            message: DEFAULT_MESSAGE.to_string(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Preset banning `urlparse` and `urlunparse`, which implement RFC 1808
    /// rather than RFC 3986.
    #[must_use]
    pub fn rfc3986_url_parsing() -> Self {
        Self::new(["urlparse", "urlunparse"])
            .message("urlparse and urlunparse implement RFC 1808, not RFC 3986")
            .suggestion("Use urlsplit and urlunsplit instead")
    }

    /// Creates the rule from its `[rules.banned-call-names]` table.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let mut rule = Self::new(config.get_str_array("names"));
        rule.message = config.get_str("message", DEFAULT_MESSAGE).to_string();
        let suggestion = config.get_str("suggestion", "");
        if !suggestion.is_empty() {
            rule.suggestion = Some(suggestion.to_string());
        }
        if let Some(severity) = config.severity {
            rule.severity = severity;
        }
        rule
    }

    /// Sets the diagnostic message prefix.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the replacement hint appended as help text.
    #[must_use]
    pub fn suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The banned terminal name of a callee, if any.
    ///
    /// Only the trailing segment matters; the base may be any shape.
    fn banned_name<'e>(&self, func: &'e Expr) -> Option<&'e str> {
        match func {
            Expr::Name(name) if self.names.contains(&name.id) => Some(&name.id),
            Expr::Attribute(attr) if self.names.contains(&attr.attr) => Some(&attr.attr),
            _ => None,
        }
    }
}

impl Rule for BannedCallNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Bans calls by terminal name, regardless of import path"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, module: &Module) -> Vec<Diagnostic> {
        if self.names.is_empty() {
            return Vec::new();
        }

        let mut visitor = NameVisitor {
            ctx,
            rule: self,
            diagnostics: Vec::new(),
        };
        visitor.visit_module(module);
        visitor.diagnostics
    }
}

struct NameVisitor<'a> {
    ctx: &'a FileContext<'a>,
    rule: &'a BannedCallNames,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Visit<'ast> for NameVisitor<'_> {
    fn visit_call(&mut self, node: &'ast Call) {
        if let Some(name) = self.rule.banned_name(&node.func) {
            let location = Location::from_span(self.ctx.relative_path.clone(), node.span);
            let mut diagnostic = Diagnostic::new(
                CODE,
                NAME,
                self.rule.severity,
                location,
                name,
                format!("{}: `{name}`", self.rule.message),
            );
            if let Some(suggestion) = &self.rule.suggestion {
                diagnostic = diagnostic.with_suggestion(Suggestion::new(suggestion));
            }
            self.diagnostics.push(diagnostic);
        }

        visit::visit_call(self, node);
    }
}
