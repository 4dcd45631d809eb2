//! Module-item identifiers.
//!
//! A module-item identifier is the canonical dotted string naming one member
//! of one module, e.g. `os.path.join`: the trailing segment is the item, the
//! segments before the final dot form the module path. The two-segment
//! minimum is enforced at construction time, so a held [`ModuleItem`] can
//! always be split.

use std::fmt;

/// A validated module-item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleItem(String);

impl ModuleItem {
    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdentError::MissingDot`] if the string has no dot: a bare
    /// name has no module path and cannot name a module member.
    pub fn new(ident: &str) -> Result<Self, IdentError> {
        if !ident.contains('.') {
            return Err(IdentError::MissingDot {
                ident: ident.to_string(),
            });
        }
        Ok(Self(ident.to_string()))
    }

    /// Joins a module path and an item name back into an identifier.
    ///
    /// Exact inverse of the [`module`](Self::module)/[`item`](Self::item)
    /// split for any valid identifier.
    #[must_use]
    pub fn from_parts(module: &str, item: &str) -> Self {
        Self(format!("{module}.{item}"))
    }

    /// The module path: every segment before the final dot.
    #[must_use]
    pub fn module(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(module, _)| module)
    }

    /// The item name: the segment after the final dot.
    #[must_use]
    pub fn item(&self) -> &str {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, item)| item)
    }

    /// The full identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ModuleItem> for String {
    fn from(item: ModuleItem) -> Self {
        item.0
    }
}

/// Errors validating module-item identifiers.
///
/// These are configuration-time errors: they surface when the restriction
/// list is loaded, before any node is visited.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentError {
    /// The identifier has no module path.
    #[error("`{ident}` is not a module item: expected `module.name` with at least one dot")]
    MissingDot {
        /// The rejected input.
        ident: String,
    },
}
