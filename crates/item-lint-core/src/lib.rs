//! # item-lint-core
//!
//! Core framework for flagging uses of restricted module items in a
//! host-driven AST walk.
//!
//! This crate provides the foundational types for building module-item
//! linters on top of an existing source-analysis pipeline. The host owns
//! parsing; it lowers its syntax tree into the [`ast`] node model and hands
//! one [`ast::Module`] per file to an [`Engine`]. The crate includes:
//!
//! - [`ast`] node model and [`visit`] traversal for the host's lowered AST
//! - [`ModuleItem`], the validated `module.item` identifier and its codec
//! - [`dotted_path`] for resolving callees to dotted identifiers
//! - [`Denylist`], the immutable restriction index
//! - [`Rule`] trait and [`Engine`] for orchestrating rule execution
//! - [`Diagnostic`] and [`LintResult`] for reporting findings
//!
//! ## Example
//!
//! ```ignore
//! use item_lint_core::{Engine, Config, FileContext};
//!
//! let engine = Engine::builder()
//!     .rule(MyRule::new())
//!     .config(Config::from_file(path)?)
//!     .build();
//!
//! let ctx = FileContext::new(file, root);
//! let result = engine.check_module(&ctx, &module);
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
mod config;
mod context;
mod denylist;
mod engine;
mod ident;
mod resolve;
mod rule;
mod types;
pub mod visit;

pub use config::{Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use denylist::Denylist;
pub use engine::{Engine, EngineBuilder};
pub use ident::{IdentError, ModuleItem};
pub use resolve::dotted_path;
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Severity, Suggestion};
