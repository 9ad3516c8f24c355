//! ModuleScanner port - extracts a module's identity from its source
//!
//! The dependency graph only needs a declared name and the identifiers a
//! module depends on; how those are recovered from source text is up to the
//! implementation.

use std::path::Path;

/// Identity of one module as far as dependency analysis is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Module identifier, e.g. `my-app/routes/index`
    pub name: String,
    /// Identifiers this module requires, already resolved to absolute form
    pub dependencies: Vec<String>,
}

impl ModuleInfo {
    pub fn new(name: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }
}

/// Recovers module identity from a file
pub trait ModuleScanner {
    /// `None` when no name can be discovered; such files are left out of
    /// the graph and never pruned.
    fn scan(&self, path: &Path, source: &str) -> Option<ModuleInfo>;
}
