//! Restriction index built from the configured denylist.

use std::collections::{HashMap, HashSet};

use crate::ident::{IdentError, ModuleItem};

/// Immutable lookup structures for restriction matching.
///
/// Built once when configuration is loaded, then shared read-only by the
/// checkers for the whole run: an exact-match set of full identifiers for
/// call sites, and a module-path → item-names map for import statements.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    exact: HashSet<String>,
    by_module: HashMap<String, HashSet<String>>,
}

impl Denylist {
    /// Builds the index from validated identifiers.
    ///
    /// Duplicate entries are idempotent, and the resulting contents do not
    /// depend on insertion order.
    #[must_use]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ModuleItem>,
    {
        let mut index = Self::default();
        for item in items {
            index
                .by_module
                .entry(item.module().to_string())
                .or_default()
                .insert(item.item().to_string());
            index.exact.insert(item.into());
        }
        index
    }

    /// Validates raw configuration entries and builds the index.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that is not a valid module-item identifier.
    /// This surfaces at configuration-load time, before any node is visited.
    pub fn parse<I, S>(entries: I) -> Result<Self, IdentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = entries
            .into_iter()
            .map(|entry| ModuleItem::new(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(items))
    }

    /// Whether a resolved call-target identifier is restricted.
    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.exact.contains(ident)
    }

    /// The restricted item names within a module, if any.
    #[must_use]
    pub fn module_items(&self, module: &str) -> Option<&HashSet<String>> {
        self.by_module.get(module)
    }

    /// Number of distinct restricted identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Whether the denylist has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
