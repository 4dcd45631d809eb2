//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules for the module being checked.
///
/// The host front end owns file discovery and parsing; this carries the
/// little file metadata rules need to anchor their diagnostics.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file, as reported by the host.
    pub path: &'a Path,
    /// Path relative to the analysis root, used in diagnostic locations.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            relative_path,
        }
    }
}
