//! Integration test: built-in rules end-to-end via the Engine.
//!
//! Plays the host role: builds the lowered AST for a small source file by
//! hand, loads rules from TOML configuration, and verifies the full
//! config → rules → engine → diagnostics pipeline.

use std::path::Path;

use item_lint_core::ast::{Expr, ImportFrom, ImportedName, Module, OtherStmt, Span, Stmt};
use item_lint_core::{Config, Engine, FileContext, LintResult, Severity};
use item_lint_rules::{BannedCallNames, RestrictedModuleItems};

const CONFIG: &str = r#"
fail_on = "warning"

[rules.restricted-module-items]
items = ["os.path.join", "requests.get"]

[rules.banned-call-names]
names = ["urlparse", "urlunparse"]
message = "urlparse and urlunparse implement RFC 1808, not RFC 3986"
suggestion = "Use urlsplit and urlunsplit instead"
"#;

fn dotted(path: &str, line: usize) -> Expr {
    let span = Span::new(line, 1);
    let mut segments = path.split('.');
    let mut expr = Expr::name(segments.next().expect("non-empty path"), span);
    for segment in segments {
        expr = Expr::attribute(expr, segment, span);
    }
    expr
}

fn call_stmt(func: Expr, line: usize) -> Stmt {
    Stmt::Expr(Expr::call(func, vec![], Span::new(line, 1)))
}

/// The lowered AST of, roughly:
///
/// ```text
/// 1  from os.path import join as j
/// 2  from . import helper
/// 3  def build(path):
/// 4      os.path.join(path, suffix)
/// 5      urlparse(path)
/// 6      factory().join(path)
/// 7  requests.get(url)
/// ```
fn sample_module() -> Module {
    let factory_join = Expr::attribute(
        Expr::call(Expr::name("factory", Span::new(6, 5)), vec![], Span::new(6, 5)),
        "join",
        Span::new(6, 5),
    );

    Module::new(vec![
        Stmt::ImportFrom(ImportFrom {
            module: Some("os.path".to_string()),
            names: vec![ImportedName::aliased("join", "j")],
            span: Span::new(1, 1),
        }),
        Stmt::ImportFrom(ImportFrom {
            module: None,
            names: vec![ImportedName::new("helper")],
            span: Span::new(2, 1),
        }),
        Stmt::Other(OtherStmt::new("function_def", Span::new(3, 1)).with_body(vec![
            call_stmt(dotted("os.path.join", 4), 4),
            call_stmt(Expr::name("urlparse", Span::new(5, 5)), 5),
            call_stmt(factory_join, 6),
        ])),
        call_stmt(dotted("requests.get", 7), 7),
    ])
}

fn build_engine(config: Config) -> Engine {
    let restricted = config
        .rule_config("restricted-module-items")
        .map_or_else(
            || Ok(RestrictedModuleItems::new(vec![])),
            RestrictedModuleItems::from_config,
        )
        .expect("restriction entries should be valid");
    let banned = config
        .rule_config("banned-call-names")
        .map_or_else(BannedCallNames::rfc3986_url_parsing, BannedCallNames::from_config);

    Engine::builder()
        .rule(restricted)
        .rule(banned)
        .config(config)
        .build()
}

fn check_sample(config: Config) -> LintResult {
    let engine = build_engine(config);
    let ctx = FileContext::new(Path::new("/project/src/app.py"), Path::new("/project"));
    engine.check_module(&ctx, &sample_module())
}

#[test]
fn detects_import_call_and_banned_name() {
    let result = check_sample(Config::parse(CONFIG).expect("config should parse"));

    // line 1: restricted import, line 4: restricted call,
    // line 5: banned name, line 7: restricted call.
    // Lines 2 and 6 must stay silent (relative import, unresolvable callee).
    assert_eq!(
        result.diagnostics.len(),
        4,
        "unexpected diagnostics: {:#?}",
        result
            .diagnostics
            .iter()
            .map(|d| format!("{} @ line {}", d.item, d.location.line))
            .collect::<Vec<_>>()
    );

    let lines: Vec<usize> = result.diagnostics.iter().map(|d| d.location.line).collect();
    assert_eq!(lines, [1, 4, 5, 7], "diagnostics should be location-sorted");

    let items: Vec<&str> = result.diagnostics.iter().map(|d| d.item.as_str()).collect();
    assert_eq!(items, ["os.path.join", "os.path.join", "urlparse", "requests.get"]);
}

#[test]
fn banned_name_diagnostic_details() {
    let result = check_sample(Config::parse(CONFIG).expect("config should parse"));

    let banned = result
        .diagnostics
        .iter()
        .find(|d| d.code == "IL002")
        .expect("should have a banned-call-names diagnostic");

    assert_eq!(banned.rule, "banned-call-names");
    assert_eq!(banned.severity, Severity::Error);
    assert!(banned.message.contains("RFC 1808"));
    assert_eq!(
        banned.suggestion.as_ref().map(|s| s.message.as_str()),
        Some("Use urlsplit and urlunsplit instead")
    );
    assert!(banned
        .location
        .file
        .to_string_lossy()
        .contains("src/app.py"));
}

#[test]
fn disabling_a_rule_silences_it() {
    let toml = CONFIG.replace(
        "[rules.banned-call-names]",
        "[rules.banned-call-names]\nenabled = false",
    );

    let result = check_sample(Config::parse(&toml).expect("config should parse"));
    assert!(result.diagnostics.iter().all(|d| d.code == "IL001"));
    assert_eq!(result.diagnostics.len(), 3);
}

#[test]
fn severity_override_applies_to_all_rule_diagnostics() {
    let toml = CONFIG.replace(
        "[rules.restricted-module-items]",
        "[rules.restricted-module-items]\nseverity = \"info\"",
    );

    let result = check_sample(Config::parse(&toml).expect("config should parse"));
    for d in result.diagnostics.iter().filter(|d| d.code == "IL001") {
        assert_eq!(d.severity, Severity::Info);
    }
    assert!(result.has_diagnostics_at(Severity::Error)); // IL002 still errors
}

#[test]
fn fail_on_threshold_comes_from_config() {
    let config = Config::parse(CONFIG).expect("config should parse");
    let fail_on = config.fail_on.unwrap_or(Severity::Error);
    assert_eq!(fail_on, Severity::Warning);

    let result = check_sample(config);
    assert!(result.has_diagnostics_at(fail_on));
    assert!(!result.format_report(fail_on).is_empty());
}

#[test]
fn invalid_restriction_entry_fails_at_load_time() {
    let config = Config::parse(
        r#"
[rules.restricted-module-items]
items = ["os.path.join", "join"]
"#,
    )
    .expect("config should parse");

    let err = RestrictedModuleItems::from_config(
        config
            .rule_config("restricted-module-items")
            .expect("table exists"),
    )
    .expect_err("bare name must be rejected before any node is visited");
    assert!(err.to_string().contains("`join`"));
}

#[test]
fn results_aggregate_across_modules() {
    let config = Config::parse(CONFIG).expect("config should parse");
    let engine = build_engine(config);

    let first_ctx = FileContext::new(Path::new("/project/src/app.py"), Path::new("/project"));
    let second_ctx = FileContext::new(Path::new("/project/src/other.py"), Path::new("/project"));
    let clean = Module::new(vec![call_stmt(dotted("os.path.exists", 1), 1)]);

    let mut total = engine.check_module(&first_ctx, &sample_module());
    total.extend(engine.check_module(&second_ctx, &clean));

    assert_eq!(total.modules_checked, 2);
    assert_eq!(total.diagnostics.len(), 4);
}
