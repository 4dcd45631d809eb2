//! Engine orchestrating rule execution over host-supplied modules.

use tracing::{debug, info};

use crate::ast::Module;
use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::types::{Diagnostic, LintResult};

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules over modules the host hands in.
///
/// The host owns file discovery, parsing, and AST lowering; the engine owns
/// rule dispatch, per-rule enablement, severity overrides, and diagnostic
/// ordering. One engine serves a whole analysis session: it is immutable
/// after construction, and results for multiple files are combined with
/// [`LintResult::extend`].
///
/// Use [`Engine::builder()`] to construct an instance.
pub struct Engine {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs all enabled rules over a single module.
    ///
    /// Diagnostics are sorted by location for reproducible output.
    #[must_use]
    pub fn check_module(&self, ctx: &FileContext, module: &Module) -> LintResult {
        debug!("Checking: {}", ctx.relative_path.display());

        let mut result = LintResult::new();
        result.modules_checked = 1;

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let diagnostics = rule.check(ctx, module);
            let diagnostics = self.apply_severity_override(rule.name(), diagnostics);
            result.diagnostics.extend(diagnostics);
        }

        result.diagnostics.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Checked {}: {} diagnostic(s)",
            ctx.relative_path.display(),
            result.diagnostics.len()
        );

        result
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Vec<Diagnostic> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for d in &mut diagnostics {
                d.severity = severity;
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::types::{Location, Severity};
    use std::path::Path;

    /// Emits one fixed diagnostic per module at the given line.
    struct FixedRule {
        line: usize,
    }

    impl Rule for FixedRule {
        fn name(&self) -> &'static str {
            "fixed-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check(&self, ctx: &FileContext, _module: &Module) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                Severity::Error,
                Location::from_span(ctx.relative_path.clone(), Span::new(self.line, 1)),
                "test.item",
                "finding",
            )]
        }
    }

    fn ctx() -> FileContext<'static> {
        FileContext::new(Path::new("/p/src/app.py"), Path::new("/p"))
    }

    #[test]
    fn runs_rules_and_counts_modules() {
        let engine = Engine::builder().rule(FixedRule { line: 1 }).build();
        assert_eq!(engine.rule_count(), 1);

        let result = engine.check_module(&ctx(), &Module::default());
        assert_eq!(result.modules_checked, 1);
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn sorts_diagnostics_by_location() {
        let engine = Engine::builder()
            .rule(FixedRule { line: 9 })
            .rule(FixedRule { line: 2 })
            .build();

        let result = engine.check_module(&ctx(), &Module::default());
        let lines: Vec<usize> = result.diagnostics.iter().map(|d| d.location.line).collect();
        assert_eq!(lines, [2, 9]);
    }

    #[test]
    fn skips_disabled_rules() {
        let config = Config::parse("[rules.fixed-rule]\nenabled = false\n").unwrap();
        let engine = Engine::builder()
            .rule(FixedRule { line: 1 })
            .config(config)
            .build();

        let result = engine.check_module(&ctx(), &Module::default());
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.modules_checked, 1);
    }

    #[test]
    fn applies_severity_override() {
        let config = Config::parse("[rules.fixed-rule]\nseverity = \"info\"\n").unwrap();
        let engine = Engine::builder()
            .rule(FixedRule { line: 1 })
            .config(config)
            .build();

        let result = engine.check_module(&ctx(), &Module::default());
        assert_eq!(result.diagnostics[0].severity, Severity::Info);
    }
}
