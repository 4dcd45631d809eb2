//! # item-lint-rules
//!
//! Built-in lint rules for item-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | IL001 | `restricted-module-items` | Flags calls to and imports of restricted module items |
//! | IL002 | `banned-call-names` | Bans calls by terminal name, regardless of import path |
//!
//! ## Usage
//!
//! ```ignore
//! use item_lint_core::Engine;
//! use item_lint_rules::{BannedCallNames, RestrictedModuleItems};
//!
//! let engine = Engine::builder()
//!     .rule(RestrictedModuleItems::parse(["os.path.join"])?)
//!     .rule(BannedCallNames::rfc3986_url_parsing())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod banned_call_names;
mod restricted_module_items;

pub use banned_call_names::BannedCallNames;
pub use restricted_module_items::RestrictedModuleItems;

/// Re-export core types for convenience.
pub use item_lint_core::{Diagnostic, Rule, Severity};
